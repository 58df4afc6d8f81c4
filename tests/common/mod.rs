#![allow(dead_code)]

pub mod fixtures;

use axisnodes::{AxisNodes, TreeNode, describe};

/// Collects a pass that is expected to succeed, rendered with `describe`.
pub fn describe_all<'a, N: TreeNode<'a>>(nodes: &AxisNodes<'_, 'a, N>) -> Vec<String> {
    nodes
        .collect_nodes()
        .expect("filtering should succeed")
        .iter()
        .map(describe)
        .collect()
}

/// True when `sub` is an order-preserving subsequence of `full`.
pub fn is_subsequence<T: PartialEq>(sub: &[T], full: &[T]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|item| rest.any(|candidate| candidate == item))
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
