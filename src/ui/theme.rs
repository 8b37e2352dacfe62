//! Colour palette and style helpers for StaffScope.
//!
//! Defines the dark and light colour schemes used throughout the
//! application, plus mode-aware helpers so views can badge records
//! consistently in either scheme.

use egui::Color32;

use crate::core::attendance::AttendanceStatus;
use crate::core::document::DocumentKind;
use crate::core::employee::EmployeeStatus;
use crate::core::leave::LeaveStatus;
use crate::core::notification::NotificationKind;

// ── Background colours (dark scheme) ────────────────────────────────────

/// Main window background.
pub const BG_DARK: Color32 = Color32::from_rgb(24, 26, 34);

/// Panel / sidebar background.
pub const BG_PANEL: Color32 = Color32::from_rgb(30, 33, 42);

/// Even rows in record tables.
pub const BG_TABLE_ROW_EVEN: Color32 = Color32::from_rgb(28, 30, 39);

/// Odd rows in record tables.
#[allow(dead_code)]
pub const BG_TABLE_ROW_ODD: Color32 = Color32::from_rgb(34, 37, 47);

/// Currently selected / highlighted row.
pub const BG_SELECTED: Color32 = Color32::from_rgb(48, 54, 78);

/// Main window background in light mode (used for the GPU clear colour).
pub const BG_LIGHT: Color32 = Color32::from_rgb(245, 246, 249);

// ── Text colours (dark scheme) ──────────────────────────────────────────

/// Primary text colour.
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(220, 222, 230);

/// Secondary / muted text.
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(150, 155, 172);

/// Dim text (hints, placeholders).
pub const TEXT_DIM: Color32 = Color32::from_rgb(105, 110, 126);

// ── Accent colours ──────────────────────────────────────────────────────

/// Primary accent (indigo).
pub const ACCENT: Color32 = Color32::from_rgb(122, 132, 255);

/// Dimmer accent for secondary highlights.
pub const ACCENT_DIM: Color32 = Color32::from_rgb(78, 85, 180);

// ── Layout constants ────────────────────────────────────────────────────

/// Vertical gap between the major sections of a view.
pub const SECTION_SPACING: f32 = 12.0;

/// Row height used by every record table.
pub const TABLE_ROW_HEIGHT: f32 = 26.0;

// ── Mode-aware colours ──────────────────────────────────────────────────

/// Primary accent for the given mode.
pub fn accent(dark: bool) -> Color32 {
    if dark {
        ACCENT
    } else {
        Color32::from_rgb(79, 70, 229)
    }
}

/// Dimmer accent for bar fills and secondary highlights.
pub fn accent_dim(dark: bool) -> Color32 {
    if dark {
        ACCENT_DIM
    } else {
        Color32::from_rgb(165, 170, 235)
    }
}

/// Primary text colour for the given mode.
pub fn text_primary(dark: bool) -> Color32 {
    if dark {
        TEXT_PRIMARY
    } else {
        Color32::from_rgb(32, 35, 44)
    }
}

/// Secondary text colour for the given mode.
pub fn text_secondary(dark: bool) -> Color32 {
    if dark {
        TEXT_SECONDARY
    } else {
        Color32::from_rgb(92, 98, 112)
    }
}

/// Dim text colour for the given mode.
pub fn text_dim(dark: bool) -> Color32 {
    if dark {
        TEXT_DIM
    } else {
        Color32::from_rgb(142, 148, 162)
    }
}

/// Background for stat cards and other raised surfaces.
pub fn card_fill(dark: bool) -> Color32 {
    if dark {
        BG_PANEL
    } else {
        Color32::from_rgb(248, 249, 251)
    }
}

/// Positive states (approved, present, active).
pub fn success(dark: bool) -> Color32 {
    if dark {
        Color32::from_rgb(96, 200, 140)
    } else {
        Color32::from_rgb(22, 140, 74)
    }
}

/// Attention states (pending, late, on leave).
pub fn warning(dark: bool) -> Color32 {
    if dark {
        Color32::from_rgb(234, 184, 82)
    } else {
        Color32::from_rgb(175, 124, 18)
    }
}

/// Negative states (rejected, absent, terminated).
pub fn danger(dark: bool) -> Color32 {
    if dark {
        Color32::from_rgb(234, 102, 102)
    } else {
        Color32::from_rgb(188, 44, 44)
    }
}

/// Neutral-informational states (half days, attendance notices).
pub fn info(dark: bool) -> Color32 {
    if dark {
        Color32::from_rgb(100, 172, 244)
    } else {
        Color32::from_rgb(34, 102, 186)
    }
}

/// Purple for leave-related markers that need to stand apart from the
/// green/amber/red status triplet.
fn violet(dark: bool) -> Color32 {
    if dark {
        Color32::from_rgb(176, 134, 234)
    } else {
        Color32::from_rgb(122, 70, 190)
    }
}

// ── Status colours ──────────────────────────────────────────────────────

/// Badge colour for an employee's employment status.
pub fn employee_status_color(status: EmployeeStatus, dark: bool) -> Color32 {
    match status {
        EmployeeStatus::Active => success(dark),
        EmployeeStatus::OnLeave => warning(dark),
        EmployeeStatus::Terminated => danger(dark),
    }
}

/// Badge colour for a day's attendance status.
pub fn attendance_status_color(status: AttendanceStatus, dark: bool) -> Color32 {
    match status {
        AttendanceStatus::Present => success(dark),
        AttendanceStatus::Absent => danger(dark),
        AttendanceStatus::Late => warning(dark),
        AttendanceStatus::HalfDay => info(dark),
        AttendanceStatus::OnLeave => violet(dark),
    }
}

/// Badge colour for a leave request's review status.
pub fn leave_status_color(status: LeaveStatus, dark: bool) -> Color32 {
    match status {
        LeaveStatus::Pending => warning(dark),
        LeaveStatus::Approved => success(dark),
        LeaveStatus::Rejected => danger(dark),
    }
}

/// Icon colour for a document's kind.
pub fn document_kind_color(kind: DocumentKind, dark: bool) -> Color32 {
    match kind {
        DocumentKind::Policy => accent(dark),
        DocumentKind::Handbook => {
            if dark {
                Color32::from_rgb(88, 196, 188)
            } else {
                Color32::from_rgb(20, 134, 128)
            }
        }
        DocumentKind::Form => info(dark),
        DocumentKind::Announcement => warning(dark),
        DocumentKind::Training => violet(dark),
        DocumentKind::Other => text_dim(dark),
    }
}

/// Marker colour for a notification's kind.
pub fn notification_kind_color(kind: NotificationKind, dark: bool) -> Color32 {
    match kind {
        NotificationKind::Leave => violet(dark),
        NotificationKind::Attendance => info(dark),
        NotificationKind::Alert => danger(dark),
        NotificationKind::Approval => success(dark),
        NotificationKind::System => text_dim(dark),
    }
}

// ── Theme application ───────────────────────────────────────────────────

/// Apply the StaffScope dark theme to the given egui context.
///
/// Should be called once during initialisation (in `App::new`).
pub fn apply_theme(ctx: &egui::Context) {
    apply_dark_theme(ctx);
}

/// Apply the StaffScope dark theme.
pub fn apply_dark_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();

    // Background tones
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_DARK;
    visuals.faint_bg_color = BG_TABLE_ROW_EVEN;

    // Override all text to our primary colour
    visuals.override_text_color = Some(TEXT_PRIMARY);

    // Widget resting state
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(44, 48, 60);
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(39, 43, 54);

    // Widget hover state
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(54, 59, 74);
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    // Widget active state
    visuals.widgets.active.bg_fill = Color32::from_rgb(64, 70, 90);

    // Non-interactive backgrounds
    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);

    // Selection
    visuals.selection.bg_fill = BG_SELECTED;
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);

    // Window appearance
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.window_stroke = egui::Stroke::new(1.0, Color32::from_rgb(50, 54, 70));

    ctx.set_visuals(visuals);
}

/// Apply the StaffScope light theme.
pub fn apply_light_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();

    // Background tones — light palette
    visuals.panel_fill = Color32::from_rgb(245, 246, 249);
    visuals.window_fill = Color32::from_rgb(250, 250, 252);
    visuals.extreme_bg_color = Color32::WHITE;
    visuals.faint_bg_color = Color32::from_rgb(238, 239, 243);

    // Text
    visuals.override_text_color = Some(Color32::from_rgb(40, 43, 52));

    // Widget resting state
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(226, 228, 234);
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Color32::from_rgb(82, 88, 102));
    visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(231, 233, 238);

    // Widget hover state
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(211, 214, 222);
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, Color32::from_rgb(40, 43, 52));

    // Widget active state
    visuals.widgets.active.bg_fill = Color32::from_rgb(196, 200, 212);

    // Non-interactive backgrounds
    visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(240, 241, 245);
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Color32::from_rgb(100, 106, 120));

    // Selection
    visuals.selection.bg_fill = Color32::from_rgb(208, 214, 246);
    visuals.selection.stroke = egui::Stroke::new(1.0, Color32::from_rgb(79, 70, 229));

    // Window appearance
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.window_stroke = egui::Stroke::new(1.0, Color32::from_rgb(205, 208, 218));

    ctx.set_visuals(visuals);
}
