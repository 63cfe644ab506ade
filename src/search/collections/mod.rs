pub mod distance_table;
