use std::{collections::BTreeSet, io::Write};

use crate::{Presenter, StreamRecord};

use super::{Entries, Render, Style, Theme};

/// Presents monitor events on a terminal, or as JSON lines
pub struct Terminal<W> {
    out: W,
    style: Style,
    theme: Theme,
    json: bool,
    clear: bool,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            style: Style::default(),
            theme: Theme::default(),
            json: false,
            clear: false,
        }
    }

    pub fn json(self, json: bool) -> Self {
        Self { json, ..self }
    }

    /// Clear the screen before each update
    pub fn clear_screen(self, clear: bool) -> Self {
        Self { clear, ..self }
    }

    pub fn style(self, style: Style) -> Self {
        Self { style, ..self }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn try_update(
        &mut self,
        streams: &[StreamRecord],
        newly_online: &BTreeSet<String>,
    ) -> anyhow::Result<()> {
        if self.json {
            #[derive(serde::Serialize)]
            struct Update<'a> {
                streams: &'a [StreamRecord],
                newly_online: &'a BTreeSet<String>,
            }

            serde_json::to_writer(
                &mut self.out,
                &Update {
                    streams,
                    newly_online,
                },
            )?;
            writeln!(self.out)?;
            return Ok(self.out.flush()?);
        }

        if self.clear {
            write!(self.out, "\x1b[2J\x1b[H")?;
        }

        Entries::new(streams, newly_online).render(&mut self.out, &self.style, &self.theme)?;
        writeln!(
            self.out,
            "{}",
            self.theme
                .clock
                .paint(format_args!("updated at {}", crate::util::clock()))
        )?;
        Ok(self.out.flush()?)
    }

    fn try_status(&mut self, key: &str, message: &str) -> anyhow::Result<()> {
        if self.json {
            let mut status = serde_json::Map::new();
            status.insert(key.into(), message.into());
            serde_json::to_writer(&mut self.out, &status)?;
            writeln!(self.out)?;
        } else {
            writeln!(
                self.out,
                "{}: {}",
                self.theme.error.paint(key),
                self.theme.game.paint(message)
            )?;
        }
        Ok(self.out.flush()?)
    }
}

impl<W: Write> Presenter for Terminal<W> {
    fn on_update(&mut self, streams: &[StreamRecord], newly_online: &BTreeSet<String>) {
        if let Err(err) = self.try_update(streams, newly_online) {
            log::error!("cannot render streams: {}", err)
        }
    }

    fn on_error(&mut self, message: &str) {
        if let Err(err) = self.try_status("error", message) {
            log::error!("cannot render error: {}", err)
        }
    }

    fn on_stopped(&mut self) {
        if let Err(err) = self.try_status("status", "stopped") {
            log::error!("cannot render status: {}", err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Event, StreamKind};

    fn update() -> Event {
        Event::Update {
            streams: vec![StreamRecord {
                user_name: "museun".into(),
                game_name: "Science & Technology".into(),
                viewer_count: 10,
                kind: StreamKind::Live,
                started_at: None,
            }],
            newly_online: ["museun".to_string()].into_iter().collect(),
        }
    }

    #[test]
    fn json_lines() {
        let mut terminal = Terminal::new(Vec::new()).json(true);
        update().dispatch(&mut terminal);
        Event::Error("unauthorized".into()).dispatch(&mut terminal);
        Event::Stopped.dispatch(&mut terminal);

        let out = String::from_utf8(terminal.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["streams"][0]["user_name"], "museun");
        assert_eq!(lines[0]["streams"][0]["type"], "live");
        assert_eq!(lines[0]["newly_online"][0], "museun");
        assert_eq!(lines[1]["error"], "unauthorized");
        assert_eq!(lines[2]["status"], "stopped");
    }

    #[test]
    fn plain_text() {
        yansi::Paint::disable();
        let mut terminal = Terminal::new(Vec::new()).style(Style::NONE);
        update().dispatch(&mut terminal);
        Event::Error("api error (500): oops".into()).dispatch(&mut terminal);

        let out = String::from_utf8(terminal.into_inner()).unwrap();
        assert!(out.starts_with("online streamers (1)\n[NEW] https://twitch.tv/museun\n"));
        assert!(out.contains("updated at "));
        assert!(out.ends_with("error: api error (500): oops\n"));
    }
}
