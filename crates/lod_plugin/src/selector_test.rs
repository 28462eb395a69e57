use super::*;
use crate::test_utils::{single_level_group, MockScene};
use crate::types::{LodGroup, LodLevel};

/// Two roots: `rock` with 2 levels, `tree` with 3.
fn two_roots() -> (MockScene, u32, u32, Vec<u32>) {
  let mut scene = MockScene::new();
  let rock = scene.spawn_root("Rock", single_level_group(0.5, &[]));
  let r0 = scene.spawn_renderer(rock, "Rock_LOD0");
  let r1 = scene.spawn_renderer(rock, "Rock_LOD1");
  scene.set_group(
    rock,
    LodGroup::from_levels([LodLevel::new(0.5, [r0]), LodLevel::new(0.25, [r1])]),
  );

  let tree = scene.spawn_root("Tree", single_level_group(0.5, &[]));
  let t0 = scene.spawn_renderer(tree, "Tree_LOD0");
  let t1 = scene.spawn_renderer(tree, "Tree_LOD1");
  let t2 = scene.spawn_renderer(tree, "Tree_LOD2");
  scene.set_group(
    tree,
    LodGroup::from_levels([
      LodLevel::new(0.5, [t0]),
      LodLevel::new(0.25, [t1]),
      LodLevel::new(0.1, [t2]),
    ]),
  );
  (scene, rock, tree, vec![r0, r1, t0, t1, t2])
}

#[test]
fn test_can_select_requires_level_on_every_root() {
  let (mut scene, rock, tree, _) = two_roots();
  scene.select(&[rock, tree]);

  assert!(can_select_at_level(&scene, 0));
  assert!(can_select_at_level(&scene, 1));
  assert!(!can_select_at_level(&scene, 2), "Rock has only 2 levels");

  scene.select(&[tree]);
  assert!(can_select_at_level(&scene, 2));
  assert!(!can_select_at_level(&scene, 8));
}

#[test]
fn test_can_select_false_without_lod_roots() {
  let (mut scene, rock, _, _) = two_roots();
  scene.select(&[]);
  assert!(!can_select_at_level(&scene, 0));

  let plain = scene.spawn_node(rock, "Plain");
  scene.select(&[plain]);
  assert!(!can_select_at_level(&scene, 0));
}

#[test]
fn test_select_replaces_selection_across_roots() {
  let (mut scene, rock, tree, ids) = two_roots();
  scene.select(&[rock, tree]);
  let mut idle = IdleQueue::new();
  let mut selector = LevelSelector::new();

  let count = selector.select(&mut scene, &mut idle, 1).expect("valid level");

  assert_eq!(count, Some(2));
  assert_eq!(scene.selection(), vec![ids[1], ids[3]]);
}

#[test]
fn test_select_filters_missing_renderers() {
  let (mut scene, rock, tree, ids) = two_roots();
  scene.despawn(ids[2]);
  scene.select(&[rock, tree]);
  let mut idle = IdleQueue::new();
  let mut selector = LevelSelector::new();

  selector.select(&mut scene, &mut idle, 0).expect("valid level");
  assert_eq!(scene.selection(), vec![ids[0]]);
}

/// The second call in the same cycle would see the renderer selection and
/// clear it; the cooldown keeps the first result.
#[test]
fn test_select_is_single_shot_per_cycle() {
  let (mut scene, rock, tree, ids) = two_roots();
  scene.select(&[rock, tree]);
  let mut idle = IdleQueue::new();
  let mut selector = LevelSelector::new();

  assert_eq!(selector.select(&mut scene, &mut idle, 0), Ok(Some(2)));
  assert_eq!(selector.select(&mut scene, &mut idle, 0), Ok(None));
  assert_eq!(scene.selection(), vec![ids[0], ids[2]]);
  assert!(selector.cooldown_active());

  for task in idle.drain() {
    assert_eq!(task, IdleTask::ReleaseSelectionCooldown);
  }
  selector.release_cooldown();

  // The selection is now renderers, which carry no group
  assert_eq!(selector.select(&mut scene, &mut idle, 0), Ok(Some(0)));
  assert!(scene.selection().is_empty());
}

#[test]
fn test_select_rejects_out_of_range_level() {
  let (mut scene, rock, _, _) = two_roots();
  scene.select(&[rock]);
  let mut idle = IdleQueue::new();
  let mut selector = LevelSelector::new();

  assert_eq!(
    selector.select(&mut scene, &mut idle, 9),
    Err(LodError::LevelOutOfRange { level: 9, max: 7 })
  );
  assert!(!selector.cooldown_active(), "Rejected calls don't start cooldown");
}

#[test]
fn test_renderers_at_level_dedupes_shared_references() {
  let mut scene = MockScene::new();
  let a = scene.spawn_root("A", single_level_group(0.5, &[]));
  let shared = scene.spawn_renderer(a, "Shared_LOD0");
  scene.set_group(a, single_level_group(0.5, &[shared]));
  let b = scene.spawn_root("B", single_level_group(0.5, &[shared]));

  assert_eq!(renderers_at_level(&scene, &[a, b], 0), vec![shared]);
  assert!(renderers_at_level(&scene, &[a, b], 3).is_empty());
}
