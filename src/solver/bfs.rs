use std::collections::VecDeque;

use hashbrown::HashSet;

use crate::engine::exec::execute_code;
use crate::hash::podium_key;
use crate::podium::Podium;
use crate::types::MoveCode;
use crate::vocab::Vocabulary;

use super::SearchLimits;

struct Node {
    blue: Podium,
    red: Podium,
    moves: Vec<MoveCode>,
}

/// Breadth-first search for a shortest code sequence transforming the
/// current pair into the target pair under the allowed vocabulary.
///
/// Returns the move word (empty when the pairs already match), or `None`
/// when the limits exhaust the frontier first — which includes genuinely
/// unreachable targets under a restricted vocabulary.
pub fn solve(
    vocab: Vocabulary,
    blue: &Podium,
    red: &Podium,
    target_blue: &Podium,
    target_red: &Podium,
    limits: SearchLimits,
) -> Option<Vec<MoveCode>> {
    if blue == target_blue && red == target_red {
        return Some(Vec::new());
    }

    let mut visited: HashSet<u128> = HashSet::new();
    visited.insert(podium_key(blue, red));

    let mut queue: VecDeque<Node> = VecDeque::new();
    queue.push_back(Node {
        blue: blue.clone(),
        red: red.clone(),
        moves: Vec::new(),
    });

    let mut expanded = 0usize;
    while let Some(node) = queue.pop_front() {
        if node.moves.len() >= limits.max_depth as usize {
            continue;
        }
        expanded += 1;
        if expanded > limits.max_nodes {
            return None;
        }
        for code in vocab.codes() {
            let mut next_blue = node.blue.clone();
            let mut next_red = node.red.clone();
            if !execute_code(code, &mut next_blue, &mut next_red) {
                continue;
            }
            if !visited.insert(podium_key(&next_blue, &next_red)) {
                continue;
            }
            let mut moves = node.moves.clone();
            moves.push(code);
            if next_blue == *target_blue && next_red == *target_red {
                return Some(moves);
            }
            queue.push_back(Node {
                blue: next_blue,
                red: next_red,
                moves,
            });
        }
    }
    None
}
