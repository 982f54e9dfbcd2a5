use super::*;
use crate::{
    basis::{Axis, Layer, Sense},
    cube,
};
use rand::prelude::*;

fn replay(initial: CubeState, rotations: &[Rotation]) -> CubeState {
    rotations
        .iter()
        .fold(initial, |state, &rotation| state.apply(rotation))
}

#[test]
fn solving_the_solved_cube_is_trivial() {
    match solve(CubeState::solved(), SolveParam::default()) {
        SolveOutcome::Solved { rotations, visited } => {
            assert!(rotations.is_empty());
            assert_eq!(visited, 1);
        }
        outcome => panic!("unexpected outcome: {:?}", outcome),
    }
}

#[test]
fn a_single_turn_is_undone_in_one_rotation() {
    let turn = Rotation {
        axis: Axis::X,
        layer: Layer::First,
        sense: Sense::Cw,
    };
    let scrambled = CubeState::solved().apply(turn);
    match solve(scrambled, SolveParam::default()) {
        SolveOutcome::Solved { rotations, visited } => {
            assert_eq!(rotations.len(), 1);
            assert_eq!(replay(scrambled, &rotations), CubeState::solved());
            // 根の展開で 18 通りの後続がすべて登録されてから完成状態が取り出される.
            assert_eq!(visited, 19);
        }
        outcome => panic!("unexpected outcome: {:?}", outcome),
    }
}

#[test]
fn each_single_rotation_scramble_is_solved_by_replay() {
    for rotation in Rotation::ALL.iter() {
        let scrambled = CubeState::solved().apply(*rotation);
        match solve(scrambled, SolveParam::default()) {
            SolveOutcome::Solved { rotations, .. } => {
                assert_eq!(rotations.len(), 1, "rotation: {}", rotation);
                assert_eq!(replay(scrambled, &rotations), CubeState::solved());
            }
            outcome => panic!("unexpected outcome for {}: {:?}", rotation, outcome),
        }
    }
}

#[test]
fn short_random_scrambles_are_solved_by_replay() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..3 {
        let (_, scrambled) = cube::scramble(&mut rng, 3);
        match solve(scrambled, SolveParam::default()) {
            SolveOutcome::Solved { rotations, .. } => {
                assert!(rotations.len() <= 3 * 3);
                assert_eq!(replay(scrambled, &rotations), CubeState::solved());
            }
            outcome => panic!("unexpected outcome: {:?}", outcome),
        }
    }
}

fn five_turn_scramble() -> CubeState {
    let turns = [
        Rotation::from_raw('x', 0, 1).unwrap(),
        Rotation::from_raw('y', 0, 1).unwrap(),
        Rotation::from_raw('z', 0, 2).unwrap(),
        Rotation::from_raw('x', 2, -1).unwrap(),
        Rotation::from_raw('y', 2, 1).unwrap(),
    ];
    let scrambled = replay(CubeState::solved(), &turns);
    assert_ne!(scrambled, CubeState::solved());
    scrambled
}

#[test]
fn a_zero_budget_stops_before_any_expansion() {
    let scrambled = five_turn_scramble();
    let param = SolveParam {
        node_budget: Some(0),
        ..SolveParam::default()
    };
    match solve(scrambled, param) {
        SolveOutcome::BudgetExhausted { visited } => assert_eq!(visited, 1),
        outcome => panic!("unexpected outcome: {:?}", outcome),
    }
}

#[test]
fn the_budget_outcome_still_counts_generated_states() {
    let scrambled = five_turn_scramble();
    let param = SolveParam {
        node_budget: Some(2),
        ..SolveParam::default()
    };
    match solve(scrambled, param) {
        SolveOutcome::BudgetExhausted { visited } => {
            // 根と 2 回の展開で生成された分.
            assert!(19 <= visited && visited <= 1 + 2 * 18);
        }
        SolveOutcome::Solved { rotations, .. } => {
            assert!(rotations.len() <= 2);
        }
        outcome => panic!("unexpected outcome: {:?}", outcome),
    }
}

#[test]
fn the_visited_index_holds_one_node_per_state() {
    let mut context = SearchContext::new(SolveParam::default());
    let root_state = CubeState::solved().apply(Rotation {
        axis: Axis::Y,
        layer: Layer::Last,
        sense: Sense::Half,
    });
    let root = context.intern(root_state, None, None);

    for rotation in Rotation::ALL.iter() {
        let next = root_state.apply(*rotation);
        match context.visited.get(&next).copied() {
            Some(existing) => context.relax(existing, root, *rotation),
            None => {
                context.intern(next, Some(root), Some(*rotation));
            }
        }
    }
    assert_eq!(context.arena.len(), context.visited.len());

    // 同じ配置をもう一度提示してもノードは増えない.
    let repeat = root_state.apply(Rotation::ALL[0]);
    assert!(context.visited.contains_key(&repeat));
    let before = context.arena.len();
    if let Some(&existing) = context.visited.get(&repeat) {
        context.relax(existing, root, Rotation::ALL[0]);
    }
    assert_eq!(context.arena.len(), before);
}

#[test]
fn relaxation_never_increases_f() {
    let mut context = SearchContext::new(SolveParam::default());
    let turn = Rotation {
        axis: Axis::Z,
        layer: Layer::First,
        sense: Sense::Ccw,
    };
    let start = CubeState::solved().apply(turn);
    let root = context.intern(start, None, None);
    let deep = context.intern(start.apply(turn), Some(root), Some(turn));
    let child = context.intern(start.apply(turn).apply(turn), Some(deep), Some(turn));

    // 深い親より浅い親を提示すると f は下がり, 逆では変わらない.
    let half = Rotation {
        axis: Axis::Z,
        layer: Layer::First,
        sense: Sense::Half,
    };
    let f_before = context.arena[child].f;
    context.relax(child, root, half);
    let f_after = context.arena[child].f;
    assert!(f_after <= f_before);
    assert_eq!(context.arena[child].parent, Some(root));
    assert_eq!(context.arena[child].rotation, Some(half));
    assert_eq!(context.arena[child].g, context.arena[root].g + 1);

    context.relax(child, deep, turn);
    assert_eq!(context.arena[child].f, f_after);
    assert_eq!(context.arena[child].parent, Some(root));
}

#[test]
fn popping_prefers_the_smallest_estimate() {
    let mut context = SearchContext::new(SolveParam::default());
    let turn = Rotation {
        axis: Axis::X,
        layer: Layer::First,
        sense: Sense::Cw,
    };
    let scrambled = CubeState::solved().apply(turn);
    let root = context.intern(scrambled, None, None);
    assert_eq!(context.pop_best(), Some(root));
    context.arena[root].expanded = true;

    let solved = context.intern(CubeState::solved(), Some(root), Some(turn.inverse()));
    for rotation in Rotation::ALL.iter().filter(|&&r| r != turn.inverse()) {
        context.intern(scrambled.apply(*rotation), Some(root), Some(*rotation));
    }
    // 完成状態は h = 0 なので f = g となり, 他のどの後続よりも小さい.
    assert_eq!(context.pop_best(), Some(solved));
}

#[test]
fn stale_frontier_entries_are_discarded() {
    let mut context = SearchContext::new(SolveParam::default());
    let turn = Rotation {
        axis: Axis::Y,
        layer: Layer::First,
        sense: Sense::Cw,
    };
    let start = CubeState::solved().apply(turn).apply(turn);
    let root = context.intern(start, None, None);
    assert_eq!(context.pop_best(), Some(root));
    context.arena[root].expanded = true;

    let deep = context.intern(start.apply(turn), Some(root), Some(turn));
    let child = context.intern(start.apply(turn).apply(turn), Some(deep), Some(turn));
    // 古い f の要素と新しい f の要素が両方フロンティアに積まれるが,
    // 取り出されるのは付け替え後の 1 回だけ.
    let half = Rotation {
        axis: Axis::Y,
        layer: Layer::First,
        sense: Sense::Half,
    };
    context.relax(child, root, half);
    let mut popped = vec![];
    while let Some(index) = context.pop_best() {
        context.arena[index].expanded = true;
        popped.push(index);
    }
    assert_eq!(popped.iter().filter(|&&i| i == child).count(), 1);
}
