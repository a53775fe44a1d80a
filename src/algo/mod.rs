/*!
# Degree-Distribution Analysis

This module provides analysis routines on top of the graph representations in this crate,
most notably power-law exponent estimation via log-binned histogram regression. All
routines work on plain degree sequences, with convenience traits implemented on every
[`AdjacencyList`](crate::ops::AdjacencyList) graph.
*/

mod exponent;

pub use exponent::*;
