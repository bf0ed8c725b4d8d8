pub mod sharded_map;
