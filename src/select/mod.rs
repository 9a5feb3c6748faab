//! Selection policy
//!
//! Resolves raw command inputs into an ordered list of target country
//! names. Each input token is either a country name or a path to a text
//! file listing one name per line; a token ending in `.txt` is treated
//! as a file. First-seen order is preserved and duplicates are kept, so
//! a name listed twice gets sampled twice.

use crate::atlas::Atlas;
use crate::error::{Error, Result};
use rand::Rng;
use std::fs;

/// Resolve input tokens (and the lucky flag) into country names
///
/// Lucky mode ignores any explicit tokens and picks exactly one country
/// uniformly at random from the full dataset. An empty resolution is
/// `NoSelection`.
pub fn resolve<R: Rng + ?Sized>(
    tokens: &[String],
    lucky: bool,
    atlas: &Atlas,
    rng: &mut R,
) -> Result<Vec<String>> {
    if lucky {
        return Ok(vec![atlas.random(rng).name.clone()]);
    }

    let mut names = Vec::new();
    for token in tokens {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if token.ends_with(".txt") {
            for line in fs::read_to_string(token)?.lines() {
                let line = line.trim();
                if !line.is_empty() {
                    names.push(line.to_string());
                }
            }
        } else {
            names.push(token.to_string());
        }
    }

    if names.is_empty() {
        return Err(Error::NoSelection);
    }

    Ok(names)
}
