// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use gdp_scrape::{config::state::GuiState, gui, log::{self, Console}};
use image::{Rgba, RgbaImage};

const ICON_SIZE: u32 = 32;

/// Three ascending bars on a dark tile, drawn in memory.
fn app_icon() -> IconData {
    let bars: [(u32, u32, Rgba<u8>); 3] = [
        (5, 14, Rgba([0x4E, 0x79, 0xA7, 0xFF])),
        (13, 8, Rgba([0xF2, 0x8E, 0x2B, 0xFF])),
        (21, 3, Rgba([0x59, 0xA1, 0x4F, 0xFF])),
    ];
    let rgba = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        bars.iter()
            .find(|(x0, top, _)| (*x0..*x0 + 7).contains(&x) && y >= *top && y < ICON_SIZE - 3)
            .map(|(_, _, c)| *c)
            .unwrap_or(Rgba([0x22, 0x26, 0x2E, 0xFF]))
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    let _guard = log::init(Console::Off, false);

    let gui_state = GuiState::default();
    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_inner_size([gui_state.window_w as f32, gui_state.window_h as f32])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
