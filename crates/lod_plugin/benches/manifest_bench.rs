//! Benchmark for scanning and manifest building over large flat
//! hierarchies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lod_plugin::manifest::build_manifest;
use lod_plugin::reconcile::reconcile_group;
use lod_plugin::{LodError, LodGroup, LodLevel, LodToolsConfig, SceneGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Root (index 0) with `count` renderer children.
struct FlatScene {
  names: Vec<String>,
  group: LodGroup<usize>,
}

impl FlatScene {
  /// Renderers get random levels; roughly half are already registered.
  fn new(count: usize) -> Self {
    let mut rng = StdRng::seed_from_u64(0x10D);
    let mut names = vec!["Root".to_string()];
    let mut levels: Vec<LodLevel<usize>> = (0..4)
      .map(|i| LodLevel::new(0.5 / (1 << i) as f32, std::iter::empty()))
      .collect();

    for id in 1..=count {
      let level = rng.random_range(0..8usize);
      names.push(format!("Part{}_LOD{}", id, level));
      if level < levels.len() && rng.random_bool(0.5) {
        levels[level].union_renderers([id]);
      }
    }

    Self {
      names,
      group: LodGroup::from_levels(levels),
    }
  }
}

impl SceneGraph for FlatScene {
  type Object = usize;

  fn renderers_in_subtree(&self, _root: usize, _include_inactive: bool) -> Vec<usize> {
    (1..self.names.len()).collect()
  }

  fn display_name(&self, object: usize) -> Option<&str> {
    self.names.get(object).map(String::as_str)
  }

  fn is_alive(&self, object: usize) -> bool {
    object < self.names.len()
  }

  fn lod_group(&self, object: usize) -> Option<&LodGroup<usize>> {
    (object == 0).then_some(&self.group)
  }

  fn set_lod_group(&mut self, _root: usize, group: LodGroup<usize>) -> Result<(), LodError> {
    self.group = group;
    Ok(())
  }
}

fn bench_build_manifest(c: &mut Criterion) {
  let mut group = c.benchmark_group("build_manifest");

  for count in [64usize, 1024, 16384] {
    let scene = FlatScene::new(count);
    group.bench_with_input(BenchmarkId::from_parameter(count), &scene, |b, scene| {
      b.iter(|| build_manifest(black_box(scene), 0, true))
    });
  }

  group.finish();
}

fn bench_reconcile_group(c: &mut Criterion) {
  let scene = FlatScene::new(4096);
  let manifest = build_manifest(&scene, 0, true).expect("random scene has gaps");
  let config = LodToolsConfig::default();

  c.bench_function("reconcile_group/4096", |b| {
    b.iter(|| {
      reconcile_group(black_box(&scene.group), black_box(&manifest), &config, |_, _| true)
    })
  });
}

criterion_group!(benches, bench_build_manifest, bench_reconcile_group);
criterion_main!(benches);
