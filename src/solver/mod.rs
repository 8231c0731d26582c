pub mod assignment;
pub mod backjump;
pub mod deepening;
pub mod domains;
pub mod engine;
pub mod heuristics;
pub mod propagate;
pub mod search;
pub mod stats;
pub mod work_list;
