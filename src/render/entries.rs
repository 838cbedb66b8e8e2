use std::{collections::BTreeSet, io::Write};

use crate::{
    string::{thousands, truncate},
    StreamRecord,
};

use super::{Render, Style, Theme};

pub struct Entries<'a> {
    pub streams: &'a [StreamRecord],
    pub newly_online: &'a BTreeSet<String>,
    pub width: usize,
}

impl<'a> Entries<'a> {
    pub fn new(streams: &'a [StreamRecord], newly_online: &'a BTreeSet<String>) -> Self {
        Self {
            streams,
            newly_online,
            width: super::width(),
        }
    }
}

impl<'a> Render for Entries<'a> {
    fn render(&self, writer: &mut dyn Write, style: &Style, theme: &Theme) -> anyhow::Result<()> {
        use unicode_width::UnicodeWidthStr as _;

        writeln!(
            writer,
            "{left}{heading} ({count})",
            left = theme.fringe.paint(style.top),
            heading = theme.heading.paint("online streamers"),
            count = self.streams.len(),
        )?;

        if self.streams.is_empty() {
            writeln!(
                writer,
                "{left}{msg}",
                left = theme.fringe.paint(style.end),
                msg = theme.vodcast.paint("no followed streamers are online"),
            )?;
            return Ok(());
        }

        const NEW: &str = "[NEW] ";
        let max_width = self.width.saturating_sub(style.game.width() + "playing ".len());

        for (n, stream) in self.streams.iter().enumerate() {
            if n > 0 {
                writeln!(writer, "{}", theme.entry.paint(style.entry_sep))?;
            }

            let is_new = self.newly_online.contains(&stream.user_name);
            writeln!(
                writer,
                "{left}{new}https://twitch.tv/{link}",
                left = theme.fringe.paint(style.link),
                new = theme.new.paint(if is_new { NEW } else { "" }),
                link = if is_new {
                    theme.new.paint(&stream.user_name)
                } else {
                    theme.link.paint(&stream.user_name)
                },
            )?;

            writeln!(
                writer,
                "{left}playing {game}",
                left = theme.fringe.paint(style.game),
                game = theme.game.paint(truncate(stream.game(), max_width)),
            )?;

            write!(
                writer,
                "{left}{viewers} watching",
                viewers = theme.viewers.paint(thousands(stream.viewer_count)),
                left = theme.fringe.paint(if n < self.streams.len() - 1 {
                    style.stats
                } else {
                    style.end
                })
            )?;

            if let Some((_, uptime)) = stream.uptime() {
                write!(writer, ", started {} ago", theme.uptime.paint(uptime))?;
            }

            if !stream.is_live() {
                write!(writer, " {}", theme.vodcast.paint("(vodcast)"))?;
            }

            writeln!(writer)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StreamKind;

    fn stream(name: &str, game: &str, viewers: u64, kind: StreamKind) -> StreamRecord {
        StreamRecord {
            user_name: name.into(),
            game_name: game.into(),
            viewer_count: viewers,
            kind,
            started_at: None,
        }
    }

    fn render(entries: &Entries<'_>) -> String {
        yansi::Paint::disable();
        let mut out = Vec::new();
        entries
            .render(&mut out, &Style::BOX, &Theme::default())
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn render_marks_new_streams() {
        let streams = [
            stream("museun", "Science & Technology", 1234, StreamKind::Live),
            stream("rerun", "", 5, StreamKind::Vodcast),
        ];
        let newly_online = ["rerun".to_string()].into_iter().collect();

        let out = render(&Entries {
            streams: &streams,
            newly_online: &newly_online,
            width: 80,
        });

        let expected = "\
┌── online streamers (2)
├ https://twitch.tv/museun
├ playing Science & Technology
├ 1,234 watching
│
├ [NEW] https://twitch.tv/rerun
├ playing No Category
└ 5 watching (vodcast)
";
        assert_eq!(out, expected);
    }

    #[test]
    fn render_empty() {
        let out = render(&Entries {
            streams: &[],
            newly_online: &BTreeSet::new(),
            width: 80,
        });
        assert_eq!(
            out,
            "┌── online streamers (0)\n└ no followed streamers are online\n"
        );
    }

    #[test]
    fn render_truncates_long_games() {
        let streams = [stream("a", "Tom Clancy's Rainbow Six Siege", 1, StreamKind::Live)];
        let out = render(&Entries {
            streams: &streams,
            newly_online: &BTreeSet::new(),
            width: 24,
        });
        assert!(out.contains("├ playing Tom Clancy's..\n"), "{}", out);
    }
}
