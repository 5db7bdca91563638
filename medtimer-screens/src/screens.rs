//! The Home and Score screens as pictures.
//!
//! A light-blue page, a white medicines card with a "Taken" chip and
//! a button bar, and a Score page with a ring gauge, stat cards and
//! the reward composite.
//! All anchors are layout coordinates fed through the shared [`Frame`].

use medtimer_graphics::error::GraphicsResult;
use medtimer_graphics::frame::Frame;
use medtimer_graphics::shapes::{PillChip, Ring, RoundedRect};
use medtimer_graphics::turtle::Turtle;
use medtimer_graphics::types::{Picture, Scalar};

use crate::adherence::Adherence;
use crate::decor::draw_composite;
use crate::palette;

/// Which screen to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Score,
}

/// Gauge geometry for the Score screen.
const GAUGE_RADIUS: Scalar = 100.0;
const GAUGE_THICKNESS: Scalar = 18.0;

/// The full-page background.
fn page_background(t: &mut Turtle, frame: &Frame) -> GraphicsResult<()> {
    RoundedRect {
        x: 0.0,
        y: 0.0,
        width: frame.width(),
        height: frame.height(),
        radius: 0.0,
        stroke: palette::PAGE_BG,
        fill: palette::PAGE_BG,
        stroke_width: 0.0,
    }
    .draw(frame, t)
}

/// Track ring plus accent arc. The accent always starts at heading
/// 90° (the layout top) regardless of the track's start heading; its
/// extent encodes the adherence percentage. A 0% accent draws nothing.
fn draw_gauge(
    t: &mut Turtle,
    frame: &Frame,
    center_x: Scalar,
    center_y: Scalar,
    radius: Scalar,
    thickness: Scalar,
    adherence: Adherence,
) -> GraphicsResult<()> {
    Ring {
        center_x,
        center_y,
        radius,
        thickness,
        color: palette::GAUGE_RING,
        start_heading: 0.0,
        extent: 360.0,
    }
    .draw(frame, t)?;

    Ring {
        center_x,
        center_y,
        radius,
        thickness,
        color: palette::GAUGE_ORANGE,
        start_heading: 90.0,
        extent: adherence.arc_extent(),
    }
    .draw(frame, t)
}

/// The "Today's Medicines" page: main card, "Taken" chip, button bar
/// and two summary chips.
pub fn home_picture(frame: &Frame) -> GraphicsResult<Picture> {
    let w = frame.width();
    let mut t = Turtle::new();

    page_background(&mut t, frame)?;

    let card_w = (w * 0.38).min(480.0);
    let card_h = 220.0;
    let card_x = if w >= 600.0 { 280.0 } else { 20.0 };
    let card_y = 110.0;
    RoundedRect {
        x: card_x,
        y: card_y,
        width: card_w,
        height: card_h,
        radius: 16.0,
        stroke: palette::CARD_BORDER,
        fill: palette::CARD_BG,
        stroke_width: 2.0,
    }
    .draw(frame, &mut t)?;

    // "Taken" chip inside the card.
    PillChip {
        x: card_x + 28.0,
        y: card_y + 90.0,
        width: 84.0,
        height: 28.0,
        background: palette::SUCCESS_BG,
        border: palette::SUCCESS_BG,
        tick: palette::SUCCESS,
    }
    .draw(frame, &mut t)?;

    // "Mark as Not Taken" button bar.
    RoundedRect {
        x: card_x + 20.0,
        y: card_y + card_h - 56.0,
        width: card_w - 40.0,
        height: 36.0,
        radius: 8.0,
        stroke: palette::DIVIDER,
        fill: palette::DIVIDER,
        stroke_width: 1.0,
    }
    .draw(frame, &mut t)?;

    // Summary chips below the card.
    let chip_w: Scalar = 200.0;
    let chip_h = 70.0;
    let spacing: Scalar = 24.0;
    let base_y = card_y + card_h + 32.0;
    for i in 0..2 {
        RoundedRect {
            x: (chip_w + spacing).mul_add(Scalar::from(i), card_x),
            y: base_y,
            width: chip_w,
            height: chip_h,
            radius: 12.0,
            stroke: palette::DIVIDER,
            fill: palette::CARD_BG,
            stroke_width: 1.0,
        }
        .draw(frame, &mut t)?;
    }

    t.finish()
}

/// The adherence page: gauge card with ring + accent arc and the
/// reward composite, then a stack of three stat cards.
pub fn score_picture(frame: &Frame, adherence: Adherence) -> GraphicsResult<Picture> {
    let w = frame.width();
    let mut t = Turtle::new();

    page_background(&mut t, frame)?;

    let gauge_card_w = 340.0;
    let gauge_card_h = 300.0;
    let gauge_card_x = (w - gauge_card_w) / 2.0;
    let gauge_card_y = 90.0;
    RoundedRect {
        x: gauge_card_x,
        y: gauge_card_y,
        width: gauge_card_w,
        height: gauge_card_h,
        radius: 22.0,
        stroke: palette::DIVIDER,
        fill: palette::CARD_BG,
        stroke_width: 1.5,
    }
    .draw(frame, &mut t)?;

    let cx = gauge_card_x + gauge_card_w / 2.0;
    let cy = gauge_card_y + gauge_card_h / 2.0 - 10.0;
    draw_gauge(
        &mut t,
        frame,
        cx,
        cy,
        GAUGE_RADIUS,
        GAUGE_THICKNESS,
        adherence,
    )?;

    if let Some(reward) = adherence.reward() {
        draw_composite(&mut t, frame, cx, cy, reward.decor())?;
    }

    // Stat cards under the gauge.
    let base_y = gauge_card_y + gauge_card_h + 28.0;
    let card_w = 380.0;
    let card_h: Scalar = 74.0;
    let styles = [
        (palette::DIVIDER, palette::CARD_BG),
        (palette::SUCCESS_BG, palette::SUCCESS_TINT),
        (palette::DIVIDER, palette::CARD_BG),
    ];
    for (i, (stroke, fill)) in styles.into_iter().enumerate() {
        RoundedRect {
            x: (w - card_w) / 2.0,
            y: (card_h + 16.0).mul_add(i as Scalar, base_y),
            width: card_w,
            height: card_h,
            radius: 12.0,
            stroke,
            fill,
            stroke_width: 1.0,
        }
        .draw(frame, &mut t)?;
    }

    t.finish()
}

/// The 300×300 raster snapshot: the Score screen's focal cluster
/// (gauge plus reward) on the page background.
pub fn snapshot_picture(frame: &Frame, adherence: Adherence) -> GraphicsResult<Picture> {
    let mut t = Turtle::new();

    page_background(&mut t, frame)?;
    draw_gauge(&mut t, frame, 150.0, 270.0, 60.0, 12.0, adherence)?;
    if let Some(reward) = adherence.reward() {
        draw_composite(&mut t, frame, 150.0, 150.0, reward.decor())?;
    }

    t.finish()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
