//! Explorer application state and logic.

use crate::{Alu, AluOp, AluOutput, Bit, Bus16, ControlWord, Gates, Nand};

/// Which input register keyboard entry goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    X,
    Y,
}

/// Explorer application state.
pub struct ExplorerApp {
    /// The x input.
    pub x: Bus16,
    /// The y input.
    pub y: Bus16,
    /// Current control word.
    pub control: ControlWord,
    /// Register receiving hex entry.
    pub focus: Register,
    /// Control bit under the cursor (0 = zx .. 5 = no).
    pub cursor: usize,
    /// Should we quit?
    pub should_quit: bool,
    /// Status message to display.
    pub status: String,
}

impl ExplorerApp {
    /// Create an explorer computing `op` on the given inputs.
    pub fn new(x: Bus16, y: Bus16, op: AluOp) -> Self {
        Self {
            x,
            y,
            control: op.control(),
            focus: Register::X,
            cursor: 0,
            should_quit: false,
            status: "Ready. Type hex digits, Tab to switch register, q to quit.".into(),
        }
    }

    /// Evaluate the ALU on the current inputs.
    pub fn result(&self) -> AluOutput {
        Nand::alu(self.x, self.y, self.control)
    }

    /// The focused register's value.
    pub fn focused(&self) -> Bus16 {
        match self.focus {
            Register::X => self.x,
            Register::Y => self.y,
        }
    }

    fn set_focused(&mut self, value: Bus16) {
        match self.focus {
            Register::X => self.x = value,
            Register::Y => self.y = value,
        }
    }

    /// Switch hex entry between x and y.
    pub fn switch_register(&mut self) {
        self.focus = match self.focus {
            Register::X => Register::Y,
            Register::Y => Register::X,
        };
        self.status = format!("Editing {:?}", self.focus);
    }

    /// Shift a hex digit into the focused register from the right.
    pub fn push_digit(&mut self, digit: u16) {
        let value = (self.focused().to_u16() << 4) | (digit & 0xF);
        self.set_focused(Bus16::from_u16(value));
    }

    /// Drop the last hex digit of the focused register.
    pub fn pop_digit(&mut self) {
        let value = self.focused().to_u16() >> 4;
        self.set_focused(Bus16::from_u16(value));
    }

    /// Clear the focused register.
    pub fn clear(&mut self) {
        self.set_focused(Bus16::zero());
        self.status = format!("Cleared {:?}", self.focus);
    }

    /// Two's-complement negate the focused register, using the ALU itself.
    pub fn negate(&mut self) {
        let value = self.focused();
        let negated = Nand::compute(value, Bus16::zero(), AluOp::NegX).out;
        self.set_focused(negated);
    }

    /// Move the control-bit cursor.
    pub fn move_cursor(&mut self, right: bool) {
        self.cursor = if right {
            (self.cursor + 1) % ControlWord::WIDTH
        } else {
            (self.cursor + ControlWord::WIDTH - 1) % ControlWord::WIDTH
        };
    }

    /// Flip the control bit under the cursor.
    pub fn toggle_bit(&mut self) {
        let mut bits = self.control.to_bits();
        bits[self.cursor] = Nand::not(bits[self.cursor]);
        self.control = ControlWord::from_bits(bits);
        self.status = match self.control.operation() {
            Some(op) => format!("Control {} computes {}", self.control, op),
            None => format!("Control {} is not a canonical operation", self.control),
        };
    }

    /// Jump to the next (or previous) canonical operation.
    pub fn cycle_operation(&mut self, forward: bool) {
        let count = AluOp::ALL.len();
        let next = match self.control.operation() {
            Some(op) => {
                let index = AluOp::ALL.iter().position(|o| *o == op).unwrap_or(0);
                if forward { (index + 1) % count } else { (index + count - 1) % count }
            }
            None => 0,
        };
        let op = AluOp::ALL[next];
        self.control = op.control();
        self.status = format!("Operation {}", op);
    }

    /// Label and value of each control bit, for display.
    pub fn control_bits(&self) -> [(&'static str, Bit); 6] {
        let [zx, nx, zy, ny, f, no] = self.control.to_bits();
        [("zx", zx), ("nx", nx), ("zy", zy), ("ny", ny), ("f", f), ("no", no)]
    }
}

/// Run the explorer starting from the given inputs.
pub fn run_explorer(x: Bus16, y: Bus16, op: AluOp) -> std::io::Result<()> {
    use crossterm::{
        event::{self, Event, KeyCode, KeyEventKind},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    };
    use ratatui::prelude::*;
    use std::io::stdout;
    use std::time::Duration;

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = ExplorerApp::new(x, y, op);

    loop {
        terminal.draw(|frame| {
            super::ui::draw(frame, &app);
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Tab => app.switch_register(),
                        KeyCode::Char('-') => app.negate(),
                        KeyCode::Char(c) if c.is_ascii_hexdigit() => {
                            if let Some(digit) = c.to_digit(16) {
                                app.push_digit(digit as u16);
                            }
                        }
                        KeyCode::Backspace => app.pop_digit(),
                        KeyCode::Delete => app.clear(),
                        KeyCode::Left => app.move_cursor(false),
                        KeyCode::Right => app.move_cursor(true),
                        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_bit(),
                        KeyCode::Up => app.cycle_operation(false),
                        KeyCode::Down => app.cycle_operation(true),
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}
