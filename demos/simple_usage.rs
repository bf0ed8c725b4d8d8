/// Complete inmem-fts API demo.
///
/// Demonstrates the main operations:
/// - adding documents with status and ratings
/// - sequential and parallel search
/// - status-filtered search
/// - minus-word exclusion
/// - matching a single document against a query
/// - removing a document
/// - batch queries and duplicate detection

use inmem_fts::core::types::Status;
use inmem_fts::search::batch::BatchQueryRunner;
use inmem_fts::search::duplicates::DuplicateDetector;
use inmem_fts::{DocId, ExecutionPolicy, SearchEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n╔═══════════════════════════════════════════════╗");
    println!("║        inmem-fts - Complete API Demo         ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    println!("Creating engine...");
    let mut engine = SearchEngine::from_stop_words_str("is the of and")?;
    println!("Done!\n");

    println!("Step 1: INSERT - Adding documents...");
    engine.add_document(DocId(1), "Rust programming language", Status::Actual, &[5])?;
    engine.add_document(
        DocId(2),
        "Database systems and query engines",
        Status::Actual,
        &[4],
    )?;
    engine.add_document(
        DocId(3),
        "Building web applications with Rust",
        Status::Actual,
        &[3],
    )?;
    engine.add_document(
        DocId(4),
        "An outdated tutorial nobody reads",
        Status::Irrelevant,
        &[1],
    )?;
    println!("  Inserted {} documents\n", engine.document_count());

    println!("Step 2: SEARCH - Querying documents...");
    for query in ["Rust", "query engines", "Rust -web"] {
        let results = engine.find_top_documents(query, ExecutionPolicy::Sequential)?;
        println!("  {:?}: {} result(s)", query, results.len());
        for r in &results {
            println!("    id={} relevance={:.4} rating={}", r.id.0, r.relevance, r.rating);
        }
    }
    println!();

    println!("Step 3: PARALLEL SEARCH - Same query, parallel policy...");
    let parallel_results = engine.find_top_documents("Rust", ExecutionPolicy::Parallel)?;
    println!("  'Rust' (parallel): {} result(s)\n", parallel_results.len());

    println!("Step 4: STATUS FILTER - Irrelevant documents only...");
    let irrelevant = engine.find_top_documents_by_status(
        "tutorial",
        Status::Irrelevant,
        ExecutionPolicy::Sequential,
    )?;
    println!("  {} irrelevant match(es)\n", irrelevant.len());

    println!("Step 5: MATCH - Does document 3 match 'Rust -database'?");
    let m = engine.match_document("Rust -database", DocId(3), ExecutionPolicy::Sequential)?;
    println!("  matched words: {:?}, status: {:?}\n", m.words, m.status);

    println!("Step 6: BATCH - Running several queries at once...");
    let queries = vec!["Rust".to_string(), "database".to_string(), "missingword".to_string()];
    let batch = BatchQueryRunner::process(&engine, &queries, ExecutionPolicy::Parallel);
    for (query, result) in queries.iter().zip(batch.iter()) {
        println!("  {:?}: {} result(s)", query, result.as_ref().map(|r| r.len()).unwrap_or(0));
    }
    println!();

    println!("Step 7: DUPLICATES - Adding a near-duplicate and cleaning up...");
    engine.add_document(DocId(5), "Rust programming language", Status::Actual, &[2])?;
    let removed = DuplicateDetector::remove_duplicates_silent(engine.store_mut());
    println!("  Removed {} duplicate document(s)\n", removed);

    println!("Step 8: DELETE - Removing document 4...");
    let removed = engine.remove_document(DocId(4), ExecutionPolicy::Sequential);
    println!("  Removed: {}\n", removed);

    println!("Step 9: FINAL STATE - Remaining documents:");
    for id in engine.iterate_ids() {
        println!("  id={} frequencies={:?}", id.0, engine.get_word_frequencies(id));
    }

    println!("\n╔════════════════════════════════════════╗");
    println!("║    All API Operations Completed!      ║");
    println!("╚════════════════════════════════════════╝\n");

    Ok(())
}
