// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

/// A search-query payload: the canonical argument forwarded through
/// operators and wrappers in tests. The sequence number makes payloads
/// from different calls distinguishable even with equal text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Query {
    pub text: String,
    pub seq: u32,
}

impl Query {
    pub fn new(text: impl Into<String>, seq: u32) -> Self {
        Self {
            text: text.into(),
            seq,
        }
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.text, self.seq)
    }
}

pub fn query_alpha() -> Query {
    Query::new("alpha", 1)
}

pub fn query_beta() -> Query {
    Query::new("beta", 2)
}

pub fn query_gamma() -> Query {
    Query::new("gamma", 3)
}

pub fn query_delta() -> Query {
    Query::new("delta", 4)
}
