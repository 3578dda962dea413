//! Floor management modal
//!
//! CRUD surface over the floor registry. The form edits a closed set of
//! fields (name, description, interior asset, music asset) on a draft;
//! add/update/delete produce whole candidate lists through the pure
//! transforms in `floor` and bubble them up as a commit action. Deletion
//! is the only destructive edit and sits behind an explicit confirmation.

use macroquad::prelude::*;
use crate::floor::{
    with_floor_added, with_floor_deleted, with_floor_updated, FloorDraft, FloorRecord,
    FloorRegistry,
};
use crate::media::MediaAsset;
use crate::prefs::ThemePalette;
use crate::ui::{
    draw_rounded_rect, draw_text_centered, text_button, text_input, ButtonVisual, Rect,
    TextInputState, UiContext,
};

/// What the modal asks the main loop to do this frame
#[derive(Debug, Clone)]
pub enum EditorAction {
    None,
    /// Replace the registry contents with this list and persist it
    Commit(Vec<FloorRecord>),
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FormMode {
    Hidden,
    Adding,
    Editing(i32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FormFocus {
    None,
    Name,
    Description,
}

const MODAL_BG: Color = Color::new(0.067, 0.094, 0.153, 1.0);
const OVERLAY: Color = Color::new(0.0, 0.0, 0.0, 0.7);
const ROW_BG: Color = Color::new(0.122, 0.161, 0.216, 1.0);
const HEADER_BORDER: Color = Color::new(0.216, 0.255, 0.318, 1.0);
const LABEL_DIM: Color = Color::new(0.6, 0.6, 0.65, 1.0);
const DANGER: Color = Color::new(0.85, 0.25, 0.25, 1.0);

const ROW_H: f32 = 32.0;
const STATUS_SECS: f64 = 3.0;

/// State of the floor management dialog
pub struct FloorEditor {
    open: bool,
    mode: FormMode,
    name: TextInputState,
    description: TextInputState,
    interior: Option<MediaAsset>,
    music: Option<MediaAsset>,
    focus: FormFocus,
    /// Level awaiting delete confirmation
    confirm_delete: Option<i32>,
    /// Transient message and its expiry time
    status: Option<(String, f64)>,
    list_scroll: usize,
}

impl FloorEditor {
    pub fn new() -> Self {
        Self {
            open: false,
            mode: FormMode::Hidden,
            name: TextInputState::default(),
            description: TextInputState::default(),
            interior: None,
            music: None,
            focus: FormFocus::None,
            confirm_delete: None,
            status: None,
            list_scroll: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.mode = FormMode::Hidden;
        self.confirm_delete = None;
        self.status = None;
        self.list_scroll = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.reset_form();
    }

    fn reset_form(&mut self) {
        self.mode = FormMode::Hidden;
        self.name.set_text("");
        self.description.set_text("");
        self.interior = None;
        self.music = None;
        self.focus = FormFocus::None;
    }

    fn set_status(&mut self, message: impl Into<String>, now: f64) {
        self.status = Some((message.into(), now + STATUS_SECS));
    }

    fn begin_edit(&mut self, record: &FloorRecord) {
        self.mode = FormMode::Editing(record.level);
        let draft = FloorDraft::from_record(record);
        self.name.set_text(draft.name);
        self.description.set_text(draft.description.unwrap_or_default());
        self.interior = draft.interior;
        self.music = draft.music;
        self.focus = FormFocus::Name;
    }

    fn begin_add(&mut self) {
        self.reset_form();
        self.mode = FormMode::Adding;
        self.focus = FormFocus::Name;
    }

    fn draft_from_form(&self) -> FloorDraft {
        let description = self.description.text.trim();
        FloorDraft {
            name: self.name.text.trim().to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
            interior: self.interior.clone(),
            music: self.music.clone(),
        }
    }

    /// Draw the modal; call only while open
    pub fn draw(
        &mut self,
        ctx: &mut UiContext,
        screen: Rect,
        registry: &FloorRegistry,
        palette: &ThemePalette,
        now: f64,
    ) -> EditorAction {
        let mut action = EditorAction::None;

        // While the delete confirmation is up it owns the mouse
        if self.confirm_delete.is_some() {
            ctx.begin_modal();
        }

        draw_rectangle(screen.x, screen.y, screen.w, screen.h, OVERLAY);
        let modal = screen.centered(760.0_f32.min(screen.w - 40.0), 480.0_f32.min(screen.h - 40.0));
        draw_rounded_rect(modal, 8.0, MODAL_BG);
        draw_rectangle_lines(modal.x, modal.y, modal.w, modal.h, 2.0, palette.border);

        // Header
        let header = modal.slice_top(48.0);
        draw_text(
            "Manage Floors",
            header.x + 18.0,
            header.y + 31.0,
            22.0,
            WHITE,
        );
        draw_line(
            header.x,
            header.bottom(),
            header.right(),
            header.bottom(),
            1.0,
            HEADER_BORDER,
        );
        let close = Rect::new(header.right() - 40.0, header.y + 10.0, 28.0, 28.0);
        if text_button(ctx, close, "x", 16.0, ButtonVisual::neutral(WHITE), true) {
            action = EditorAction::Close;
        }

        // Body: floor list on the left, form on the right
        let body = modal.below_top(48.0).pad(16.0);
        let (list_area, form_area) = body.split_h_px(body.w * 0.38);
        let list_area = Rect::new(list_area.x, list_area.y, list_area.w - 12.0, list_area.h);
        draw_line(
            form_area.x - 6.0,
            body.y,
            form_area.x - 6.0,
            body.bottom(),
            1.0,
            HEADER_BORDER,
        );

        // The list never commits directly; edits flow through the form,
        // deletes through the confirmation dialog
        self.draw_floor_list(ctx, list_area, registry, palette);

        match self.mode {
            FormMode::Hidden => {
                draw_text_centered(
                    "Select a floor to edit or add a new one.",
                    &form_area,
                    14.0,
                    LABEL_DIM,
                );
            }
            _ => {
                if let Some(form_action) = self.draw_form(ctx, form_area, registry, palette, now) {
                    action = form_action;
                }
            }
        }

        // Status line
        if let Some((message, expires)) = self.status.clone() {
            if now < expires {
                draw_text(&message, modal.x + 18.0, modal.bottom() - 10.0, 13.0, palette.text);
            } else {
                self.status = None;
            }
        }

        // Delete confirmation sits on top of everything
        if let Some(level) = self.confirm_delete {
            ctx.end_modal();
            if let Some(confirm_action) = self.draw_confirm(ctx, screen, registry, level) {
                action = confirm_action;
            }
        }

        action
    }

    fn draw_floor_list(
        &mut self,
        ctx: &mut UiContext,
        area: Rect,
        registry: &FloorRegistry,
        palette: &ThemePalette,
    ) {
        let add_h = 36.0;
        let list = Rect::new(area.x, area.y, area.w, area.h - add_h - 8.0);

        // Wheel-scroll when the list overflows
        let visible_rows = ((list.h + 6.0) / (ROW_H + 6.0)).max(1.0) as usize;
        let max_scroll = registry.len().saturating_sub(visible_rows);
        if ctx.mouse.inside(&list) && ctx.mouse.scroll != 0.0 {
            if ctx.mouse.scroll < 0.0 {
                self.list_scroll = (self.list_scroll + 1).min(max_scroll);
            } else {
                self.list_scroll = self.list_scroll.saturating_sub(1);
            }
        }
        self.list_scroll = self.list_scroll.min(max_scroll);

        for (slot, record) in registry
            .records()
            .iter()
            .skip(self.list_scroll)
            .take(visible_rows)
            .enumerate()
        {
            let row = Rect::new(list.x, list.y + slot as f32 * (ROW_H + 6.0), list.w, ROW_H);
            draw_rounded_rect(row, 4.0, ROW_BG);

            let label = format!("{}: {}", record.level, record.name);
            draw_text(&label, row.x + 8.0, row.y + 21.0, 14.0, WHITE);

            let del = Rect::new(row.right() - 40.0, row.y + 4.0, 36.0, ROW_H - 8.0);
            let edit = Rect::new(del.x - 44.0, row.y + 4.0, 40.0, ROW_H - 8.0);
            if text_button(ctx, edit, "Edit", 12.0, ButtonVisual::neutral(WHITE), true) {
                self.begin_edit(record);
            }
            if text_button(
                ctx,
                del,
                "Del",
                12.0,
                ButtonVisual {
                    fill: Color::new(0.25, 0.12, 0.12, 1.0),
                    fill_hover: Color::new(0.4, 0.15, 0.15, 1.0),
                    text: DANGER,
                },
                true,
            ) {
                self.confirm_delete = Some(record.level);
            }
        }

        let add = Rect::new(area.x, area.bottom() - add_h, area.w, add_h);
        if text_button(
            ctx,
            add,
            "+ Add New Floor",
            15.0,
            ButtonVisual::accent(palette.accent),
            true,
        ) {
            self.begin_add();
        }
    }

    fn draw_form(
        &mut self,
        ctx: &mut UiContext,
        area: Rect,
        registry: &FloorRegistry,
        palette: &ThemePalette,
        now: f64,
    ) -> Option<EditorAction> {
        let mut action = None;
        let area = Rect::new(area.x + 6.0, area.y, area.w - 6.0, area.h);

        let heading = match self.mode {
            FormMode::Adding => "Add New Floor".to_string(),
            FormMode::Editing(level) => format!("Editing Floor {}", level),
            FormMode::Hidden => return None,
        };
        draw_text(&heading, area.x, area.y + 18.0, 18.0, WHITE);

        // Feed keys to the focused field before drawing it
        match self.focus {
            FormFocus::Name => self.name.handle_input(),
            FormFocus::Description => self.description.handle_input(),
            FormFocus::None => {}
        }

        let field_h = 30.0;
        let mut y = area.y + 36.0;

        draw_text("Floor Name*", area.x, y + 12.0, 13.0, LABEL_DIM);
        let name_rect = Rect::new(area.x, y + 18.0, area.w, field_h);
        if text_input(ctx, name_rect, &self.name, self.focus == FormFocus::Name, palette.accent) {
            self.focus = FormFocus::Name;
        }
        y += 56.0;

        draw_text("Description", area.x, y + 12.0, 13.0, LABEL_DIM);
        let desc_rect = Rect::new(area.x, y + 18.0, area.w, field_h);
        if text_input(
            ctx,
            desc_rect,
            &self.description,
            self.focus == FormFocus::Description,
            palette.accent,
        ) {
            self.focus = FormFocus::Description;
        }
        y += 56.0;

        // Clicking anywhere else drops field focus
        if ctx.mouse.left_pressed
            && !ctx.mouse.inside(&name_rect)
            && !ctx.mouse.inside(&desc_rect)
        {
            self.focus = FormFocus::None;
        }

        y = self.draw_asset_row(ctx, area, y, AssetSlot::Music, now);
        y = self.draw_asset_row(ctx, area, y, AssetSlot::Interior, now);

        let buttons_y = (y + 10.0).max(area.bottom() - 34.0);
        let cancel = Rect::new(area.right() - 180.0, buttons_y, 80.0, 30.0);
        let save = Rect::new(area.right() - 92.0, buttons_y, 92.0, 30.0);
        if text_button(ctx, cancel, "Cancel", 14.0, ButtonVisual::neutral(WHITE), true) {
            self.reset_form();
            return None;
        }
        if text_button(
            ctx,
            save,
            "Save",
            14.0,
            ButtonVisual::accent(palette.accent),
            true,
        ) {
            if self.name.text.trim().is_empty() {
                self.set_status("Name cannot be empty", now);
            } else {
                let draft = self.draft_from_form();
                let records = registry.records();
                let updated = match self.mode {
                    FormMode::Adding => with_floor_added(records, draft),
                    FormMode::Editing(level) => with_floor_updated(records, level, draft),
                    FormMode::Hidden => return None,
                };
                action = Some(EditorAction::Commit(updated));
                self.set_status("Saved", now);
                self.reset_form();
            }
        }

        action
    }

    fn draw_asset_row(
        &mut self,
        ctx: &mut UiContext,
        area: Rect,
        y: f32,
        slot: AssetSlot,
        now: f64,
    ) -> f32 {
        let label = match slot {
            AssetSlot::Music => "Floor Music (audio file)",
            AssetSlot::Interior => "Interior Content (image, video, ...)",
        };
        draw_text(label, area.x, y + 12.0, 13.0, LABEL_DIM);
        let row = Rect::new(area.x, y + 18.0, area.w, 30.0);
        draw_rounded_rect(row, 4.0, ROW_BG);

        let current = match slot {
            AssetSlot::Music => &self.music,
            AssetSlot::Interior => &self.interior,
        };

        match current {
            Some(asset) => {
                let name = asset.original_name.clone();
                let shown = if name.chars().count() > 24 {
                    let head: String = name.chars().take(23).collect();
                    format!("{}\u{2026}", head)
                } else {
                    name
                };
                draw_text(&shown, row.x + 8.0, row.y + 20.0, 13.0, WHITE);
                let remove = Rect::new(row.right() - 70.0, row.y + 3.0, 66.0, 24.0);
                if text_button(
                    ctx,
                    remove,
                    "Remove",
                    12.0,
                    ButtonVisual {
                        fill: Color::new(0.25, 0.12, 0.12, 1.0),
                        fill_hover: Color::new(0.4, 0.15, 0.15, 1.0),
                        text: DANGER,
                    },
                    true,
                ) {
                    match slot {
                        AssetSlot::Music => self.music = None,
                        AssetSlot::Interior => self.interior = None,
                    }
                }
            }
            None => {
                let import = Rect::new(row.x + 3.0, row.y + 3.0, 110.0, 24.0);
                if text_button(
                    ctx,
                    import,
                    "Import File...",
                    12.0,
                    ButtonVisual::neutral(WHITE),
                    true,
                ) {
                    self.import_into_slot(slot, now);
                }
            }
        }

        y + 56.0
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn import_into_slot(&mut self, slot: AssetSlot, now: f64) {
        let mut dialog = rfd::FileDialog::new();
        if slot == AssetSlot::Music {
            dialog = dialog.add_filter("Audio", &["mp3", "ogg", "wav", "flac", "m4a"]);
        }
        let Some(path) = dialog.pick_file() else {
            return;
        };
        match MediaAsset::import_from_path(&path) {
            Ok(asset) => {
                self.set_status(format!("Imported {}", asset.original_name), now);
                match slot {
                    AssetSlot::Music => self.music = Some(asset),
                    AssetSlot::Interior => self.interior = Some(asset),
                }
            }
            Err(e) => {
                eprintln!("Failed to import {}: {}", path.display(), e);
                self.set_status(format!("Import failed: {}", e), now);
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn import_into_slot(&mut self, _slot: AssetSlot, now: f64) {
        self.set_status("File import is unavailable in the browser build", now);
    }

    fn draw_confirm(
        &mut self,
        ctx: &mut UiContext,
        screen: Rect,
        registry: &FloorRegistry,
        level: i32,
    ) -> Option<EditorAction> {
        let mut action = None;
        draw_rectangle(screen.x, screen.y, screen.w, screen.h, OVERLAY);
        let dialog = screen.centered(360.0, 140.0);
        draw_rounded_rect(dialog, 8.0, MODAL_BG);
        draw_rectangle_lines(dialog.x, dialog.y, dialog.w, dialog.h, 2.0, DANGER);

        let message = format!("Delete floor {}? This cannot be undone.", level);
        draw_text_centered(&message, &dialog.slice_top(80.0), 14.0, WHITE);

        let cancel = Rect::new(dialog.center_x() - 110.0, dialog.bottom() - 44.0, 100.0, 30.0);
        let delete = Rect::new(dialog.center_x() + 10.0, dialog.bottom() - 44.0, 100.0, 30.0);
        if text_button(ctx, cancel, "Cancel", 14.0, ButtonVisual::neutral(WHITE), true) {
            self.confirm_delete = None;
        }
        if text_button(
            ctx,
            delete,
            "Delete",
            14.0,
            ButtonVisual {
                fill: DANGER,
                fill_hover: Color::new(0.95, 0.35, 0.35, 1.0),
                text: WHITE,
            },
            true,
        ) {
            action = Some(EditorAction::Commit(with_floor_deleted(
                registry.records(),
                level,
            )));
            self.confirm_delete = None;
            // Editing the floor that just went away makes no sense
            if self.mode == FormMode::Editing(level) {
                self.reset_form();
            }
        }
        action
    }
}

impl Default for FloorEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum AssetSlot {
    Interior,
    Music,
}
