use albumdeck_spotify::CurrentlyPlaying;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// `Track (Artist, Artist)`, or `None` when nothing is playing.
pub fn describe(now_playing: Option<&CurrentlyPlaying>) -> String {
    now_playing
        .and_then(|p| p.item.as_ref())
        .map(|item| item.display_name())
        .unwrap_or_else(|| "None".to_string())
}

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Currently playing ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let now_playing = app.now_playing.as_ref();
    let (icon, icon_color) = match now_playing {
        Some(p) if p.is_playing && p.item.is_some() => ("\u{25B6} ", Color::Green),
        Some(p) if p.item.is_some() => ("\u{25A0} ", Color::Yellow),
        _ => ("  ", Color::DarkGray),
    };

    let mut spans = vec![
        Span::styled(icon, Style::default().fg(icon_color)),
        Span::styled(
            describe(now_playing),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(device) = app.devices.active_device() {
        spans.push(Span::styled(
            format!("  on {}", device.name),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use albumdeck_spotify::{PlayingItem, SimplifiedArtist};

    fn artist(name: &str) -> SimplifiedArtist {
        SimplifiedArtist {
            id: None,
            name: name.to_string(),
            uri: None,
        }
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(None), "None");

        let mut playing = CurrentlyPlaying {
            is_playing: true,
            progress_ms: None,
            item: None,
        };
        assert_eq!(describe(Some(&playing)), "None");

        playing.item = Some(PlayingItem {
            name: "Teardrop".to_string(),
            uri: "spotify:track:67Hna13dNDkZvBpTXRIaOJ".to_string(),
            artists: vec![artist("Massive Attack"), artist("Elizabeth Fraser")],
            duration_ms: 330_000,
        });
        assert_eq!(
            describe(Some(&playing)),
            "Teardrop (Massive Attack, Elizabeth Fraser)"
        );
    }
}
