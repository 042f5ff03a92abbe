// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the tagdex CLI.
//!
//! Boxed sections, a small OneDark / One Light palette, and renderers for
//! services, keyword lists and validation reports. Colors are dropped when
//! stdout isn't a TTY or `NO_COLOR` is set, so piping into `grep` just works.
//!
//! # Theme detection order
//!
//! 1. `TAGDEX_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use tagdex::{CatalogStats, Project, Service, ValidationResult};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("TAGDEX_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg" where bg >= 7 (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTE
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            match theme() {
                Theme::Dark => rgb(onedark::$name),
                Theme::Light => rgb(onelight::$name),
            }
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut `text` to at most `max` visible characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}┐{}",
        border(),
        label_part,
        border(),
        "─".repeat(remaining),
        reset()
    );
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border(),
        reset(),
        content,
        " ".repeat(pad),
        border(),
        reset()
    );
}

/// └──────────────────┘
pub fn section_bottom() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// RENDERERS
// ═══════════════════════════════════════════════════════════════════════════

// Line builders keep every row within BOX_WIDTH visible columns.

/// ` Title [id]`, with the id cut to whatever the title leaves over.
fn service_heading(service: &Service) -> String {
    let title = truncate(&service.title, 32);
    let budget = BOX_WIDTH.saturating_sub(visible_len(&title) + 4);
    format!(
        " {} {}",
        themed(CYAN, &[BOLD], &title),
        themed(GRAY, &[], &format!("[{}]", truncate(&service.id, budget)))
    )
}

/// ` 2023 Name [id]`
fn project_heading(project: &Project) -> String {
    let year = project
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "----".to_string());
    let year = truncate(&year, 4);
    let name = truncate(&project.name, 36);
    let budget = BOX_WIDTH.saturating_sub(visible_len(&year) + visible_len(&name) + 5);
    format!(
        " {} {} {}",
        themed(YELLOW, &[], &year),
        themed(CYAN, &[BOLD], &name),
        themed(GRAY, &[], &format!("[{}]", truncate(&project.id, budget)))
    )
}

fn list_line(item: &str) -> String {
    format!(" {}", truncate(item, BOX_WIDTH - 1))
}

pub fn print_services(label: &str, services: &[&Service]) {
    section_top(&format!("{} ({})", label, services.len()));
    if services.is_empty() {
        row(&themed(GRAY, &[], " no matches"));
    }
    for service in services {
        row(&service_heading(service));
        row(&format!("   {}", truncate(&service.summary, BOX_WIDTH - 4)));
    }
    section_bottom();
}

pub fn print_service_detail(service: &Service) {
    section_top(&service.title);
    row(&format!(" id        {}", truncate(&service.id, BOX_WIDTH - 11)));
    row(&format!(
        " keywords  {}",
        truncate(&service.keywords.join(", "), BOX_WIDTH - 11)
    ));
    row(&format!(" summary   {}", truncate(&service.summary, BOX_WIDTH - 11)));
    section_bottom();
    print_projects(&service.projects.iter().collect::<Vec<_>>());
}

pub fn print_projects(projects: &[&Project]) {
    section_top(&format!("Projects ({})", projects.len()));
    for project in projects {
        row(&project_heading(project));
        row(&format!(
            "      {}",
            truncate(&project.tech_stack.join(" · "), BOX_WIDTH - 7)
        ));
    }
    section_bottom();
}

pub fn print_list(label: &str, items: &[&str]) {
    section_top(&format!("{} ({})", label, items.len()));
    for item in items {
        row(&list_line(item));
    }
    section_bottom();
}

pub fn print_stats(stats: &CatalogStats) {
    section_top("Catalog");
    row(&format!(" services      {}", stats.service_count));
    row(&format!(" projects      {}", stats.project_count));
    row(&format!(" keywords      {}", stats.keyword_count));
    row(&format!(" technologies  {}", stats.technology_count));
    section_bottom();
}

pub fn print_validation(result: &ValidationResult) {
    let verdict = if result.valid {
        themed(GREEN, &[BOLD], "valid")
    } else {
        themed(RED, &[BOLD], "invalid")
    };
    section_top("Validation");
    row(&format!(
        " {}  {} errors, {} warnings",
        verdict,
        result.errors.len(),
        result.warnings.len()
    ));
    for error in &result.errors {
        row(&format!(" {} {}", themed(RED, &[], "✗"), truncate(error, BOX_WIDTH - 4)));
    }
    for warning in &result.warnings {
        row(&format!(
            " {} {}",
            themed(YELLOW, &[], "!"),
            truncate(warning, BOX_WIDTH - 4)
        ));
    }
    section_bottom();
}
