use std::{cmp::Reverse, collections::BinaryHeap};

use fxhash::FxHashMap;

use crate::{basis::Rotation, cube::CubeState};

pub(crate) mod heuristic;
#[cfg(test)]
mod tests;

/// `SolveParam` は 1 回の探索の調整パラメータを表す.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SolveParam {
    /// ヒューリスティックの除数. 大きいほど見積もりが軽くなって探索は速く,
    /// 解は長くなりやすい.
    pub(crate) divisor: f64,
    /// 展開するノード数の上限. `None` なら打ち切らない.
    pub(crate) node_budget: Option<usize>,
}

impl Default for SolveParam {
    fn default() -> Self {
        Self {
            divisor: heuristic::DEFAULT_DIVISOR,
            node_budget: None,
        }
    }
}

/// `SolveOutcome` は探索の終わり方を表す.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SolveOutcome {
    /// 解が見つかった. `rotations` を初期配置へ順に適用すると完成状態になる.
    Solved {
        rotations: Vec<Rotation>,
        visited: usize,
    },
    /// フロンティアを使い切っても完成状態に到達しなかった.
    Exhausted { visited: usize },
    /// ノード予算を使い切って打ち切った.
    BudgetExhausted { visited: usize },
}

/// 探索グラフのノード. 親はアリーナの添字で参照する.
#[derive(Debug)]
struct Node {
    state: CubeState,
    parent: Option<usize>,
    /// 親の配置からこのノードの配置へ至る回転. 根では `None`.
    rotation: Option<Rotation>,
    g: u64,
    h: f64,
    f: f64,
    expanded: bool,
}

/// フロンティアの要素. `f` は積んだ時点の値で, 付け替えで古くなったものは
/// 取り出すときに読み捨てる. `f` が等しいノードどうしの順序は任意.
#[derive(Debug)]
struct OpenEntry {
    f: f64,
    node: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f.total_cmp(&other.f)
    }
}

/// `SearchContext` は 1 回の探索が占有するフロンティアと訪問済み索引を表す.
struct SearchContext {
    arena: Vec<Node>,
    /// 生成した配置ごとに 1 個のノードを持つ. 要素が消えることはない.
    visited: FxHashMap<CubeState, usize>,
    open: BinaryHeap<Reverse<OpenEntry>>,
    param: SolveParam,
}

impl SearchContext {
    fn new(param: SolveParam) -> Self {
        Self {
            arena: vec![],
            visited: FxHashMap::default(),
            open: BinaryHeap::new(),
            param,
        }
    }

    /// 初めて観測した配置をノードにしてアリーナ, 訪問済み索引, フロンティアへ登録する.
    fn intern(
        &mut self,
        state: CubeState,
        parent: Option<usize>,
        rotation: Option<Rotation>,
    ) -> usize {
        let g = parent.map_or(0, |p| self.arena[p].g + 1);
        let h = heuristic::estimate(&state, self.param.divisor);
        let f = g as f64 + h;
        let index = self.arena.len();
        self.arena.push(Node {
            state,
            parent,
            rotation,
            g,
            h,
            f,
            expanded: false,
        });
        self.visited.insert(state, index);
        self.open.push(Reverse(OpenEntry { f, node: index }));
        index
    }

    /// より安い親が見つかったときだけ親と回転, g, f を付け替える. 改善は
    /// 子孫へは伝播せず, 展開済みのノードが再展開されることもない.
    fn relax(&mut self, node: usize, parent: usize, rotation: Rotation) {
        let tentative_g = self.arena[parent].g + 1;
        let tentative_f = tentative_g as f64 + self.arena[node].h;
        if tentative_f < self.arena[node].f {
            let entry = &mut self.arena[node];
            entry.parent = Some(parent);
            entry.rotation = Some(rotation);
            entry.g = tentative_g;
            entry.f = tentative_f;
            if !entry.expanded {
                self.open.push(Reverse(OpenEntry {
                    f: tentative_f,
                    node,
                }));
            }
        }
    }

    /// f が最小の未展開ノードを取り出す. 古くなった要素は読み捨てる.
    fn pop_best(&mut self) -> Option<usize> {
        while let Some(Reverse(entry)) = self.open.pop() {
            let node = &self.arena[entry.node];
            if node.expanded || node.f != entry.f {
                continue;
            }
            return Some(entry.node);
        }
        None
    }

    /// 完成状態のノードから親リンクを根まで辿り, 適用順の回転列へ直す.
    fn backtrack(&self, mut index: usize) -> Vec<Rotation> {
        let mut rotations = vec![];
        while let Some(parent) = self.arena[index].parent {
            let rotation = self.arena[index]
                .rotation
                .expect("a non-root node records the rotation that reached it");
            rotations.push(rotation);
            index = parent;
        }
        rotations.reverse();
        rotations
    }
}

/// 与えられた配置から完成状態までの回転手順を最良優先探索で求める.
pub(crate) fn solve(initial: CubeState, param: SolveParam) -> SolveOutcome {
    let goal = CubeState::solved();
    let mut context = SearchContext::new(param);
    context.intern(initial, None, None);

    let mut expansions = 0;
    while let Some(index) = context.pop_best() {
        if context.arena[index].state == goal {
            return SolveOutcome::Solved {
                rotations: context.backtrack(index),
                visited: context.visited.len(),
            };
        }
        if let Some(budget) = context.param.node_budget {
            if budget <= expansions {
                return SolveOutcome::BudgetExhausted {
                    visited: context.visited.len(),
                };
            }
        }
        expansions += 1;
        context.arena[index].expanded = true;

        let state = context.arena[index].state;
        for rotation in Rotation::ALL.iter() {
            let next = state.apply(*rotation);
            match context.visited.get(&next).copied() {
                Some(existing) => context.relax(existing, index, *rotation),
                None => {
                    context.intern(next, Some(index), Some(*rotation));
                }
            }
        }
    }
    SolveOutcome::Exhausted {
        visited: context.visited.len(),
    }
}
