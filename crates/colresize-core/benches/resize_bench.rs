#![forbid(unsafe_code)]

use colresize_core::{HeaderNode, ResizeAction, StartResize, header_id_widths, reduce};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn start(left: &HeaderNode, right: &HeaderNode) -> ResizeAction {
    ResizeAction::Start(Box::new(StartResize {
        column_id: left.id.clone(),
        column_width: left.total_width,
        header_id_widths: header_id_widths(left),
        left_header: left.clone(),
        right_header: right.clone(),
        width_unit_per_px: 1.0,
        headers: vec![left.clone(), right.clone()],
        client_x: 0.0,
    }))
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize/reducer");
    let left = HeaderNode::leaf("left", 120.0, 40.0, 400.0);
    let right = HeaderNode::leaf("right", 120.0, 40.0, 400.0);

    group.bench_function("start_move_64_end", |b| {
        b.iter(|| {
            let mut state = reduce(None, &start(&left, &right));
            for step in 0..64 {
                let x = f64::from(step) * 3.0 - 96.0;
                state = reduce(Some(&state), &ResizeAction::Move { client_x: x });
            }
            state = reduce(Some(&state), &ResizeAction::End);
            black_box(state.column_widths.len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_drag);
criterion_main!(benches);
