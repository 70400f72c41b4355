#![no_main]

use arbitrary::Arbitrary;
use colresize_core::{PointerInput, TouchPoint};
use colresize_table::{
    CaptureSet, ColumnDef, DragController, RESIZE_COLUMNS, TableInstance, TableOptions,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Step {
    Press { column: u8, x: i16, touches: u8 },
    Move { x: i16, touch: bool },
    Release { touch: bool },
    Reset,
    Container { px: u16 },
}

#[derive(Debug, Arbitrary)]
struct Input {
    widths: Vec<(u8, u8, u8)>,
    steps: Vec<Step>,
}

fuzz_target!(|input: Input| {
    // 2..8 columns with width, min and max derived from the bytes.
    let columns: Vec<ColumnDef> = input
        .widths
        .iter()
        .take(8)
        .enumerate()
        .map(|(i, &(w, lo, hi))| {
            let min = f64::from(lo % 64);
            let max = min + f64::from(hi) + 1.0;
            let width = (f64::from(w) + 1.0).clamp(min, max);
            ColumnDef::new(format!("c{i}"))
                .width(width)
                .min_width(min)
                .max_width(max)
        })
        .collect();
    if columns.len() < 2 {
        return;
    }

    let mut table = TableInstance::new(TableOptions::default(), vec![RESIZE_COLUMNS]);
    table.render(&columns).expect("resize plugin alone is always ordered");
    let mut drag = DragController::new(CaptureSet::default());

    for step in input.steps.iter().take(256) {
        match *step {
            Step::Press { column, x, touches } => {
                let id = format!("c{}", usize::from(column) % columns.len());
                let press = if touches == 0 {
                    PointerInput::MouseDown { client_x: f64::from(x) }
                } else {
                    PointerInput::TouchStart {
                        touches: (0..touches % 3)
                            .map(|n| TouchPoint::new(u32::from(n), f64::from(x), 0.0))
                            .collect(),
                    }
                };
                drag.press(&mut table, &id.as_str().into(), &press);
            }
            Step::Move { x, touch } => {
                let input = if touch {
                    PointerInput::TouchMove {
                        touches: vec![TouchPoint::new(0, f64::from(x), 0.0)],
                        cancelable: true,
                    }
                } else {
                    PointerInput::MouseMove { client_x: f64::from(x) }
                };
                drag.pointer_event(&mut table, &input);
            }
            Step::Release { touch } => {
                let input = if touch {
                    PointerInput::TouchEnd { touches: Vec::new() }
                } else {
                    PointerInput::MouseUp { client_x: 0.0 }
                };
                drag.pointer_event(&mut table, &input);
            }
            Step::Reset => table.reset_resizing(),
            Step::Container { px } => table.container_ref().set_width(f64::from(px)),
        }

        // Post-conditions that must always hold:
        for header in table.headers() {
            assert!(header.width >= 0.0, "negative width for {}", header.id);
            assert!(header.width.is_finite(), "non-finite width for {}", header.id);
        }
        let state = table.state().column_resizing();
        assert!(
            !state.is_active() || drag.is_dragging(),
            "active column without a controller drag"
        );
        if !drag.is_dragging() {
            assert!(drag.scope().attached().is_empty(), "listeners leaked");
        }
    }
});
