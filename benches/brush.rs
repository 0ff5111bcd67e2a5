use criterion::{criterion_group, criterion_main, Criterion, black_box};

use brushwork::brush::{run_to_completion, BiomeMode, BrushDriver, FillMode};
use brushwork::selection::BrushShape;
use brushwork::voxel::biome::BiomeId;
use brushwork::voxel::chunk::ChunkPos;
use brushwork::voxel::world::{default_flat_layers, ChunkedWorld};
use brushwork::voxel::BlockTypes;

use glam::Vec3;

fn flat_world(blocks: &BlockTypes, radius: i32) -> ChunkedWorld {
    let layers = default_flat_layers(blocks);
    let mut world = ChunkedWorld::new(blocks.clone());
    for cx in -radius..=radius {
        for cz in -radius..=radius {
            world.generate_flat(ChunkPos::new(cx, cz), &layers);
        }
    }
    world
}

fn bench_biome_brush(c: &mut Criterion) {
    let blocks = BlockTypes::default();
    let mut world = flat_world(&blocks, 2);

    for size in [5.0f32, 33.0] {
        let driver = BrushDriver::new(Box::new(BiomeMode::with_biome(BiomeId::FOREST)))
            .with_shape(BrushShape::Round)
            .with_brush_size(Vec3::new(size, 1.0, size))
            .expect("valid brush size");

        c.bench_function(&format!("biome_brush_round_{}", size as u32), |b| {
            b.iter(|| {
                let steps = driver.apply(&mut world, black_box(Vec3::new(8.0, 63.0, 8.0))).unwrap();
                run_to_completion(steps)
            });
        });
    }
}

fn bench_fill_brush(c: &mut Criterion) {
    let blocks = BlockTypes::default();
    let mut world = flat_world(&blocks, 1);

    for shape in BrushShape::ALL {
        let driver = BrushDriver::new(Box::new(FillMode::new(&blocks).expect("stone is registered")))
            .with_shape(shape)
            .with_brush_size(Vec3::splat(9.0))
            .expect("valid brush size");

        c.bench_function(&format!("fill_brush_{}_9", shape.name()), |b| {
            b.iter(|| {
                let steps = driver.apply(&mut world, black_box(Vec3::new(8.0, 70.0, 8.0))).unwrap();
                run_to_completion(steps)
            });
        });
    }
}

fn bench_cursor_level(c: &mut Criterion) {
    let blocks = BlockTypes::default();
    let driver = BrushDriver::new(Box::new(FillMode::new(&blocks).expect("stone is registered")))
        .with_shape(BrushShape::Round)
        .with_brush_size(Vec3::splat(17.0))
        .expect("valid brush size");

    c.bench_function("cursor_level_round_17", |b| {
        b.iter(|| driver.cursor_level(black_box(&blocks)).unwrap());
    });
}

criterion_group!(benches, bench_biome_brush, bench_fill_brush, bench_cursor_level);
criterion_main!(benches);
