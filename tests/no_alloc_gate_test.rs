use std::alloc::{GlobalAlloc, Layout as AllocLayout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_snake::core::{Canvas, GameState, Layout, PixelBuffer, Status};
use tui_snake::term::{FrameBuffer, PixelView, Viewport};
use tui_snake::types::Direction;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: AllocLayout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: AllocLayout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: AllocLayout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

/// Square lap of side 4; a length-5 snake never catches its tail.
const LAP: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Up,
];

fn lap_direction(i: usize) -> Direction {
    LAP[(i / 4) % LAP.len()]
}

#[test]
fn step_and_draw_do_not_allocate() {
    // 16x16 cells; the lap from the center stays inside the interior.
    let mut gs = GameState::new(Layout::new(32, 32, 2), 5).unwrap();
    let mut pixels = PixelBuffer::new(32, 32);

    // Warm-up.
    gs.step(Some(lap_direction(0)));

    let allocs = with_alloc_counting(|| {
        for i in 1..400 {
            let status = gs.step(Some(lap_direction(i)));
            assert_eq!(status, Status::Running);

            pixels.clear();
            for cmd in gs.draw_commands() {
                cmd.apply(&mut pixels);
            }
        }
    });

    assert_eq!(gs.ticks(), 400);
    assert!(allocs == 0);
}

#[test]
fn pixel_view_reuses_framebuffer() {
    let mut gs = GameState::new(Layout::new(32, 32, 2), 5).unwrap();
    let mut pixels = PixelBuffer::new(32, 32);
    let view = PixelView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(0, 0);

    // Warm-up sizes the framebuffer.
    view.render_into(&pixels, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..100 {
            gs.step(Some(lap_direction(i)));
            pixels.clear();
            for cmd in gs.draw_commands() {
                cmd.apply(&mut pixels);
            }
            view.render_into(&pixels, viewport, &mut fb);
        }
    });

    assert!(allocs == 0);
}
