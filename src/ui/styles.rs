use crate::domain::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style(theme: Theme) -> Style {
    match theme {
        Theme::Dark => Style::default().fg(Color::White),
        Theme::Light => Style::default().fg(Color::Black).bg(Color::White),
    }
}

/// Selected row highlight style
pub fn selected_style(theme: Theme) -> Style {
    match theme {
        Theme::Dark => Style::default()
            .fg(Color::Black)
            .bg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
        Theme::Light => Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    }
}

/// Style for the row currently being dragged
pub fn dragging_style(theme: Theme) -> Style {
    selected_style(theme).add_modifier(Modifier::ITALIC)
}

/// Completed task style
pub fn done_style(_theme: Theme) -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Running timer badge style
pub fn running_style(_theme: Theme) -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Idle timer badge style
pub fn idle_style(_theme: Theme) -> Style {
    Style::default().fg(Color::Gray)
}

/// Title style for panes
pub fn title_style(theme: Theme) -> Style {
    match theme {
        Theme::Dark => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        Theme::Light => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    }
}

/// Border style
pub fn border_style(theme: Theme) -> Style {
    match theme {
        Theme::Dark => Style::default().fg(Color::Gray),
        Theme::Light => Style::default().fg(Color::DarkGray),
    }
}

/// Completion gauge style
pub fn gauge_style(theme: Theme) -> Style {
    match theme {
        Theme::Dark => Style::default().fg(Color::Cyan).bg(Color::DarkGray),
        Theme::Light => Style::default().fg(Color::Blue).bg(Color::Gray),
    }
}

/// Keybinding hint style
pub fn hint_style(theme: Theme) -> Style {
    match theme {
        Theme::Dark => Style::default().fg(Color::DarkGray),
        Theme::Light => Style::default().fg(Color::Gray),
    }
}

/// Modal background style
pub fn modal_bg_style(theme: Theme) -> Style {
    match theme {
        Theme::Dark => Style::default().bg(Color::DarkGray).fg(Color::White),
        Theme::Light => Style::default().bg(Color::Gray).fg(Color::Black),
    }
}

/// Modal title style
pub fn modal_title_style(_theme: Theme) -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Completion flash message style
pub fn flash_style(_theme: Theme) -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}
