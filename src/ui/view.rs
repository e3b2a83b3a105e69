use crate::app::{AppMode, RenderState};
use crate::reading::{PlaybackState, ReadingUnit};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const HELP_LINES: &[(&str, &str)] = &[
    ("Space", "play / pause"),
    ("← h  → l", "previous / next word"),
    ("[  ]", "previous / next sentence"),
    ("+  -", "faster / slower"),
    ("r", "back to the start"),
    (": @", "open the command deck"),
    ("@file  @@", "load a file / the clipboard"),
    (":wiki  :random", "load a Wikipedia article"),
    (":wpm N  :seek N", "set speed / jump to word N"),
    (":ease on|off", "ramp up speed on play"),
    (":dark on|off", "switch palette"),
    ("q", "quit"),
];

/// Where the word and its context go on one row.
///
/// The ORP character always lands on the middle column of `row`; the word
/// is shifted left by the display width of whatever precedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordLayout {
    pub left: Rect,
    pub word: Rect,
    pub right: Rect,
}

pub fn word_layout(row: Rect, unit: &ReadingUnit) -> WordLayout {
    let (before, _, _) = unit.split_at_orp();
    let anchor_column = row.x + row.width / 2;
    let lead = u16::try_from(before.width()).unwrap_or(u16::MAX);
    let row_end = row.x + row.width;

    let word_x = anchor_column.saturating_sub(lead).max(row.x);
    let word_width = u16::try_from(unit.text.width())
        .unwrap_or(u16::MAX)
        .min(row_end - word_x);
    let word_end = word_x + word_width;

    let left_end = word_x.saturating_sub(1).max(row.x);
    let right_x = (word_end + 1).min(row_end);

    WordLayout {
        left: Rect::new(row.x, row.y, left_end - row.x, 1),
        word: Rect::new(word_x, row.y, word_width, 1),
        right: Rect::new(right_x, row.y, row_end - right_x, 1),
    }
}

pub fn render_word_display(unit: &ReadingUnit, theme: &Theme) -> Paragraph<'static> {
    let (before, anchor, after) = unit.split_at_orp();
    let plain = Style::default().fg(theme.text);

    let mut spans = vec![Span::styled(before, plain)];
    if let Some(anchor) = anchor {
        spans.push(Span::styled(
            anchor.to_string(),
            Style::default()
                .fg(theme.anchor)
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(after, plain));

    Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.background))
}

pub fn render_context(words: &[String], alignment: Alignment, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(words.join(" "))
        .alignment(alignment)
        .style(Style::default().fg(theme.dimmed).bg(theme.background))
}

/// Share of the document read so far, counting the word on screen.
pub fn progress_fraction(progress: (usize, usize)) -> f64 {
    let (index, total) = progress;
    if total == 0 {
        return 0.0;
    }
    ((index + 1) as f64 / total as f64).min(1.0)
}

pub fn render_progress_bar(progress: (usize, usize), width: u16, theme: &Theme) -> Line<'static> {
    let width = width as usize;
    let filled = (progress_fraction(progress) * width as f64).round() as usize;

    Line::from(vec![
        Span::styled("─".repeat(filled), Style::default().fg(theme.anchor)),
        Span::styled(
            "─".repeat(width.saturating_sub(filled)),
            Style::default().fg(theme.dimmed),
        ),
    ])
}

fn playback_label(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Idle => "ready",
        PlaybackState::Playing => "playing",
        PlaybackState::Paused => "paused",
    }
}

pub fn render_status_line(state: &RenderState, theme: &Theme) -> Line<'static> {
    let (index, total) = state.progress;
    let position = if total == 0 { 0 } else { index + 1 };

    let mut spans = vec![
        Span::styled(
            state.mode.label(),
            Style::default().fg(theme.background).bg(theme.anchor),
        ),
        Span::styled(
            format!(
                " {} · {} wpm · {}/{}",
                playback_label(state.playback),
                state.wpm,
                position,
                total
            ),
            Style::default().fg(theme.text),
        ),
    ];
    if let Some(status) = &state.status {
        spans.push(Span::styled(
            format!(" · {}", status),
            Style::default().fg(theme.dimmed),
        ));
    }
    Line::from(spans)
}

pub fn render_command_deck(input: &str, theme: &Theme) -> Paragraph<'static> {
    let mut spans = vec![
        Span::styled("▌ ", Style::default().fg(theme.anchor)),
        Span::styled(input.to_string(), Style::default().fg(theme.text)),
        Span::styled("█", Style::default().fg(theme.dimmed)),
    ];
    if input.is_empty() {
        spans.push(Span::styled(
            "  @file  @@  :wiki  :random  :help",
            Style::default().fg(theme.dimmed),
        ));
    }
    Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface))
}

pub fn render_help(theme: &Theme) -> Paragraph<'static> {
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("{:>18}  ", keys), Style::default().fg(theme.anchor)),
                Span::styled(*action, Style::default().fg(theme.text)),
            ])
        })
        .collect();
    Paragraph::new(lines).style(Style::default().bg(theme.background))
}

pub fn render_placeholder(theme: &Theme) -> Paragraph<'static> {
    let text = "Type @filename to load a file\nOr @@ to load from clipboard\n:wiki for today's featured article\n:q to quit";
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.dimmed).bg(theme.background))
}

/// Draws one full frame.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    let theme = Theme::for_dark_mode(state.dark_mode);
    let area = frame.area();
    if area.height < 3 || area.width == 0 {
        return;
    }

    frame.render_widget(
        Paragraph::new("").style(Style::default().bg(theme.background)),
        area,
    );

    let deck_height = u16::from(state.mode == AppMode::Command);
    let main = Rect::new(area.x, area.y, area.width, area.height - 2 - deck_height);
    let progress_row = Rect::new(area.x, main.y + main.height, area.width, 1);
    let status_row = Rect::new(area.x, progress_row.y + 1, area.width, 1);

    if state.mode == AppMode::Help {
        frame.render_widget(render_help(&theme), main);
    } else if let Some(unit) = &state.current {
        let row = Rect::new(main.x, main.y + main.height / 2, main.width, 1);
        let layout = word_layout(row, unit);
        frame.render_widget(
            render_context(&state.context_left, Alignment::Right, &theme),
            layout.left,
        );
        frame.render_widget(render_word_display(unit, &theme), layout.word);
        frame.render_widget(
            render_context(&state.context_right, Alignment::Left, &theme),
            layout.right,
        );
    } else {
        let lines = 4.min(main.height);
        let placeholder = Rect::new(main.x, main.y + (main.height - lines) / 2, main.width, lines);
        frame.render_widget(render_placeholder(&theme), placeholder);
    }

    frame.render_widget(
        render_progress_bar(state.progress, area.width, &theme),
        progress_row,
    );
    frame.render_widget(render_status_line(state, &theme), status_row);

    if deck_height > 0 {
        let deck = Rect::new(area.x, status_row.y + 1, area.width, 1);
        frame.render_widget(Clear, deck);
        frame.render_widget(render_command_deck(&state.command_input, &theme), deck);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::tokenize_text;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn single(text: &str) -> ReadingUnit {
        tokenize_text(text).remove(0)
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    fn render(state: &RenderState, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_anchor_lands_on_middle_column() {
        let row = Rect::new(0, 5, 41, 1);
        let unit = single("reading");
        assert_eq!(unit.orp, 2);
        let layout = word_layout(row, &unit);
        assert_eq!(layout.word.x + 2, 20);
        assert_eq!(layout.word.width, 7);
    }

    #[test]
    fn test_layout_keeps_gap_around_word() {
        let row = Rect::new(0, 0, 40, 1);
        let layout = word_layout(row, &single("cat"));
        assert_eq!(layout.left.x + layout.left.width + 1, layout.word.x);
        assert_eq!(layout.word.x + layout.word.width + 1, layout.right.x);
        assert_eq!(layout.right.x + layout.right.width, 40);
    }

    #[test]
    fn test_layout_uses_display_width() {
        let row = Rect::new(0, 0, 40, 1);
        // CJK characters occupy two columns each
        let unit = ReadingUnit {
            text: "漢字".to_string(),
            orp: 1,
            pause_after: 0,
            punctuation: String::new(),
        };
        let layout = word_layout(row, &unit);
        assert_eq!(layout.word.x, 18);
        assert_eq!(layout.word.width, 4);
    }

    #[test]
    fn test_layout_clips_to_narrow_row() {
        let row = Rect::new(2, 0, 6, 1);
        let layout = word_layout(row, &single("incomprehensibilities"));
        assert_eq!(layout.word.x, 2);
        assert_eq!(layout.word.width, 6);
        assert_eq!(layout.left.width, 0);
        assert_eq!(layout.right.width, 0);
    }

    #[test]
    fn test_progress_fraction() {
        assert_eq!(progress_fraction((0, 0)), 0.0);
        assert_eq!(progress_fraction((0, 4)), 0.25);
        assert_eq!(progress_fraction((3, 4)), 1.0);
    }

    #[test]
    fn test_progress_bar_spans_width() {
        let theme = Theme::midnight();
        let bar = render_progress_bar((1, 4), 20, &theme);
        assert_eq!(bar.spans[0].content.chars().count(), 10);
        assert_eq!(bar.spans[1].content.chars().count(), 10);
    }

    #[test]
    fn test_status_line_shows_position_and_message() {
        let theme = Theme::midnight();
        let mut state =
            RenderState::empty(AppMode::Reading).with_units(&tokenize_text("a b c"), 1, 1);
        state.wpm = 400;
        state.status = Some("loaded".to_string());
        let text: String = render_status_line(&state, &theme)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert!(text.contains("READING"));
        assert!(text.contains("400 wpm"));
        assert!(text.contains("2/3"));
        assert!(text.ends_with("loaded"));
    }

    #[test]
    fn test_draw_word_frame() {
        let units = tokenize_text("the quick fox");
        let state = RenderState::empty(AppMode::Reading).with_units(&units, 1, 1);
        let buffer = render(&state, 41, 9);

        let row = row_text(&buffer, 3);
        assert!(row.contains("quick"));
        assert!(row.contains("the"));
        assert!(row.contains("fox"));
        // "quick" has its ORP on 'u', index 1
        assert_eq!(buffer[(20, 3)].symbol(), "u");
        assert_eq!(buffer[(20, 3)].fg, Theme::midnight().anchor);
    }

    #[test]
    fn test_draw_placeholder_without_text() {
        let state = RenderState::empty(AppMode::Reading);
        let buffer = render(&state, 50, 10);
        let all: String = (0..10).map(|y| row_text(&buffer, y)).collect();
        assert!(all.contains("@filename"));
    }

    #[test]
    fn test_draw_command_deck_on_last_row() {
        let mut state = RenderState::empty(AppMode::Command);
        state.command_input = ":wpm 500".to_string();
        let buffer = render(&state, 40, 8);
        assert!(row_text(&buffer, 7).contains(":wpm 500"));
        assert!(row_text(&buffer, 6).contains("COMMAND"));
    }

    #[test]
    fn test_draw_help() {
        let state = RenderState::empty(AppMode::Help);
        let buffer = render(&state, 60, 16);
        let all: String = (0..16).map(|y| row_text(&buffer, y)).collect();
        assert!(all.contains("play / pause"));
    }

    #[test]
    fn test_draw_tiny_terminal_does_not_panic() {
        let units = tokenize_text("word");
        let state = RenderState::empty(AppMode::Command).with_units(&units, 0, 1);
        render(&state, 3, 2);
        render(&state, 1, 4);
    }
}
