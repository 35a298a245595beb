//! Terminal rendition of the two screens: home (single navigation action)
//! and location (map panel, street, timestamp, register button, modal).
//!
//! Both screens read commands from any `BufRead` and draw to any `Write`.

use crate::core::diagnostics::Diagnostic;
use crate::core::flow::{FlowSnapshot, LocationCheckInFlow};
use crate::core::map::MapRegion;
use crate::core::profile::ScreenProfile;
use crate::errors::AppResult;
use crate::models::{CheckInRecord, FlowState};
use crate::providers::LocationProvider;
use crate::ui::messages::{Level, write_line};
use crate::utils::colors::paint;
use chrono::{DateTime, Local};
use std::io::{BufRead, Write};

const MAP_WIDTH: usize = 44;

/// How the location screen gets its save/confirm decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Interactive,
    /// Press "Registrar Ponto" and confirm straight away.
    AutoConfirm,
    /// Press "Registrar Ponto" and cancel the modal.
    AutoCancel,
}

/// What the location screen leaves behind when it closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenOutcome {
    pub state: FlowState,
    pub record: Option<CheckInRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct Screen<R, W> {
    input: R,
    out: W,
    profile: ScreenProfile,
    color: bool,
}

impl<R: BufRead, W: Write> Screen<R, W> {
    pub fn new(input: R, out: W, profile: ScreenProfile, color: bool) -> Self {
        Self {
            input,
            out,
            profile,
            color,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Next trimmed, lowercased line; `None` on end of input.
    fn read_command(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    fn tint(&self, text: &str, fg: &str) -> String {
        paint(text, fg, Some(self.profile.palette.background), self.color)
    }

    /// Home screen. Returns `None` when the user leaves without checking in.
    pub async fn run_home<P, C>(
        &mut self,
        provider: &P,
        mode: InputMode,
        clock: C,
    ) -> AppResult<Option<ScreenOutcome>>
    where
        P: LocationProvider,
        C: Fn() -> DateTime<Local>,
    {
        loop {
            writeln!(self.out, "==================== rCheckin ====================")?;
            let action = self.tint(
                &format!("( {} )", self.profile.home_action),
                self.profile.palette.button,
            );
            writeln!(self.out, "            {action}")?;
            writeln!(self.out, "[m] {}   [q] sair", self.profile.home_action)?;

            match self.read_command()?.as_deref() {
                Some("m") | Some("") => {
                    return self.run_location(provider, mode, clock).await.map(Some);
                }
                Some("q") | None => return Ok(None),
                Some(other) => writeln!(self.out, "Opção desconhecida: '{other}'")?,
            }
        }
    }

    /// Location screen: one activation of the check-in flow.
    pub async fn run_location<P, C>(
        &mut self,
        provider: &P,
        mode: InputMode,
        clock: C,
    ) -> AppResult<ScreenOutcome>
    where
        P: LocationProvider,
        C: Fn() -> DateTime<Local>,
    {
        let flow = LocationCheckInFlow::new(self.profile.clone());

        writeln!(self.out, "⏳ Obtendo localização…")?;
        flow.activate(provider).await?;
        self.draw(&flow.snapshot())?;

        match mode {
            InputMode::AutoConfirm | InputMode::AutoCancel => {
                if flow.state().can_save() {
                    self.press_save(&flow)?;
                    if mode == InputMode::AutoConfirm {
                        self.confirm(&flow, &clock)?;
                    } else {
                        flow.cancel()?;
                        self.draw(&flow.snapshot())?;
                    }
                }
            }
            InputMode::Interactive => self.interact(&flow, &clock)?,
        }

        let snap = flow.snapshot();
        let outcome = ScreenOutcome {
            state: snap.state,
            record: snap.record,
            diagnostics: flow.take_diagnostics(),
        };
        flow.teardown();
        Ok(outcome)
    }

    fn interact<C>(&mut self, flow: &LocationCheckInFlow, clock: &C) -> AppResult<()>
    where
        C: Fn() -> DateTime<Local>,
    {
        // Error screens only show the message; there is nothing to press.
        while flow.state().can_save() {
            writeln!(self.out, "[r] {}   [q] sair", self.profile.save_label)?;
            match self.read_command()?.as_deref() {
                Some("r") => {
                    self.press_save(flow)?;
                    loop {
                        writeln!(
                            self.out,
                            "[c] {}   [x] {}",
                            self.profile.confirm_label, self.profile.cancel_label
                        )?;
                        match self.read_command()?.as_deref() {
                            Some("c") => {
                                self.confirm(flow, clock)?;
                                break;
                            }
                            Some("x") | None => {
                                flow.cancel()?;
                                self.draw(&flow.snapshot())?;
                                break;
                            }
                            Some(other) => writeln!(self.out, "Opção desconhecida: '{other}'")?,
                        }
                    }
                }
                Some("q") | None => break,
                Some(other) => writeln!(self.out, "Opção desconhecida: '{other}'")?,
            }
        }
        Ok(())
    }

    fn press_save(&mut self, flow: &LocationCheckInFlow) -> AppResult<()> {
        flow.save()?;
        self.draw_modal()
    }

    fn confirm<C>(&mut self, flow: &LocationCheckInFlow, clock: &C) -> AppResult<()>
    where
        C: Fn() -> DateTime<Local>,
    {
        flow.confirm(&clock())?;
        if let Some(note) = flow.take_notification() {
            write_line(&mut self.out, Level::Success, note, self.color)?;
        }
        self.draw(&flow.snapshot())
    }

    fn draw_modal(&mut self) -> AppResult<()> {
        let p = &self.profile;
        let prompt = paint(p.modal_prompt, p.palette.text, Some(p.palette.modal), self.color);
        let confirm = paint(p.confirm_label, "#FFFFFF", Some("#2196F3"), self.color);
        let cancel = paint(p.cancel_label, "#FFFFFF", Some(p.palette.cancel), self.color);
        writeln!(self.out, "+{}+", "=".repeat(MAP_WIDTH))?;
        writeln!(self.out, "  {prompt}")?;
        writeln!(self.out, "  [{confirm}]  [{cancel}]")?;
        writeln!(self.out, "+{}+", "=".repeat(MAP_WIDTH))?;
        Ok(())
    }

    fn draw(&mut self, snap: &FlowSnapshot) -> AppResult<()> {
        if snap.loading {
            writeln!(self.out, "⏳ Obtendo localização…")?;
            return Ok(());
        }

        if let Some(err) = &snap.error_message {
            write_line(&mut self.out, Level::Error, err, self.color)?;
        }

        if let Some(fix) = &snap.fix {
            let region = MapRegion::around(fix, self.profile.marker_title);
            for line in map_panel(&region) {
                writeln!(self.out, "{line}")?;
            }
            let captured = fix.captured_at().format("%H:%M:%S");
            match fix.accuracy() {
                Some(acc) => writeln!(
                    self.out,
                    "  {} (±{acc:.0} m) @ {captured}",
                    fix.coords_str()
                )?,
                None => writeln!(self.out, "  {} @ {captured}", fix.coords_str())?,
            }
        }

        if let Some(street) = &snap.street {
            let label = self.tint(street.as_str(), self.profile.palette.text);
            writeln!(self.out, "{label}")?;
        }

        if let Some(record) = &snap.record {
            let stamp = self.tint(&record.timestamp, self.profile.palette.text);
            writeln!(self.out, "{stamp}")?;
        }

        if snap.state.can_save() {
            let button = self.tint(
                &format!("[ {} ]", self.profile.save_label),
                self.profile.palette.button,
            );
            writeln!(self.out, "{button}")?;
        }
        Ok(())
    }
}

/// ASCII map panel: region bounds with the marker in the middle.
pub fn map_panel(region: &MapRegion) -> Vec<String> {
    let (south, west, north, east) = region.bounds();
    let inner = MAP_WIDTH;
    let title = format!(" {} ", region.marker_title);
    let title_len = title.chars().count();
    let left = inner.saturating_sub(title_len) / 2;
    let right = inner.saturating_sub(title_len + left);

    let row = |content: String| {
        let pad = inner.saturating_sub(content.chars().count());
        format!("|{content}{}|", " ".repeat(pad))
    };

    let north_s = format!("N {north:.5}");
    let south_s = format!("S {south:.5}");
    let west_s = format!("W {west:.5}");
    let east_s = format!("E {east:.5}");
    let gap = inner.saturating_sub(west_s.len() + east_s.len() + 3) / 2;
    let middle = format!(
        " {west_s}{}X{}{east_s}",
        " ".repeat(gap),
        " ".repeat(inner.saturating_sub(west_s.len() + east_s.len() + 3 + gap))
    );

    vec![
        format!("+{}{}{}+", "-".repeat(left), title, "-".repeat(right)),
        row(format!("{:^inner$}", north_s)),
        row(middle),
        row(format!("{:^inner$}", south_s)),
        format!("+{}+", "-".repeat(inner)),
    ]
}
