use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{Canvas, GameState, Layout, PixelBuffer};
use tui_snake::term::{encode_diff_into, FrameBuffer, PixelView, Viewport};
use tui_snake::types::{Direction, MAX_SNAKE_LENGTH};

const LAP: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Up,
];

fn bench_step(c: &mut Criterion) {
    let fresh = GameState::new(Layout::new(32, 32, 2), 5).unwrap();
    let mut state = fresh.clone();
    let mut i = 0usize;

    c.bench_function("step_lap", |b| {
        b.iter(|| {
            if state.is_dead() {
                state = fresh.clone();
            }
            state.step(black_box(Some(LAP[(i / 4) % 4])));
            i += 1;
        })
    });
}

fn bench_step_long_snake(c: &mut Criterion) {
    // Longest snake straight across a wide display; collision scans the whole body.
    let layout = Layout::new(512, 32, 2);
    let fresh = GameState::new(layout, MAX_SNAKE_LENGTH).unwrap();
    let mut state = fresh.clone();

    c.bench_function("step_max_length", |b| {
        b.iter(|| {
            if state.is_dead() {
                state = fresh.clone();
            }
            state.step(black_box(None));
        })
    });
}

fn bench_draw(c: &mut Criterion) {
    let state = GameState::new(Layout::new(32, 32, 2), 5).unwrap();
    let mut pixels = PixelBuffer::new(32, 32);

    c.bench_function("draw_frame", |b| {
        b.iter(|| {
            pixels.clear();
            for cmd in state.draw_commands() {
                cmd.apply(&mut pixels);
            }
            black_box(pixels.lit_count());
        })
    });
}

fn bench_present_diff(c: &mut Criterion) {
    let mut state = GameState::new(Layout::new(32, 32, 2), 5).unwrap();
    let mut pixels = PixelBuffer::new(32, 32);
    let view = PixelView::default();
    let viewport = Viewport::new(80, 24);
    let mut prev = FrameBuffer::new(0, 0);
    let mut next = FrameBuffer::new(0, 0);
    let mut out = Vec::with_capacity(16 * 1024);
    let mut i = 0usize;

    view.render_into(&pixels, viewport, &mut prev);

    c.bench_function("present_diff", |b| {
        b.iter(|| {
            state.step(Some(LAP[(i / 4) % 4]));
            i += 1;
            pixels.clear();
            for cmd in state.draw_commands() {
                cmd.apply(&mut pixels);
            }
            view.render_into(&pixels, viewport, &mut next);
            out.clear();
            encode_diff_into(&prev, &next, &mut out).unwrap();
            std::mem::swap(&mut prev, &mut next);
            black_box(out.len());
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_step_long_snake,
    bench_draw,
    bench_present_diff
);
criterion_main!(benches);
