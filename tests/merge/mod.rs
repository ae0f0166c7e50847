mod merge_simple_divergence;
mod merge_with_conflicts;
