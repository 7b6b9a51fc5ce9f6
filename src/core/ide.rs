use crate::domain::model::{Choice, MenuState, BANNER, MENU_LINES, PROMPT};
use crate::domain::ports::Terminal;
use crate::utils::error::{IdeError, Result};
use crate::utils::monitor::{SessionMonitor, SessionSummary};

/// The interactive menu loop.
pub struct IdeEngine<T: Terminal> {
    terminal: T,
    monitor: SessionMonitor,
    state: MenuState,
}

impl<T: Terminal> IdeEngine<T> {
    pub fn new(terminal: T) -> Self {
        Self::new_with_monitoring(terminal, false)
    }

    pub fn new_with_monitoring(terminal: T, enable_monitoring: bool) -> Self {
        Self {
            terminal,
            monitor: SessionMonitor::new(enable_monitoring),
            state: MenuState::default(),
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Runs until the exit choice is read.
    ///
    /// Fails with [`IdeError::InputClosed`] when input ends first, or with an
    /// I/O error from the terminal.
    pub fn run(&mut self) -> Result<SessionSummary> {
        tracing::info!("Starting LMC IDE session");

        self.terminal.write_line(BANNER)?;

        while self.state.is_running() {
            let choice = self.step()?;
            self.state = self.state.next(&choice);
        }

        tracing::info!("LMC IDE session finished");
        self.monitor.log_final_stats();

        Ok(self.monitor.summary())
    }

    /// One iteration: menu, prompt, dispatch.
    fn step(&mut self) -> Result<Choice> {
        for line in MENU_LINES {
            self.terminal.write_line(line)?;
        }

        let input = match self.terminal.prompt(PROMPT)? {
            Some(input) => input,
            None => {
                tracing::warn!("Input closed while waiting for a menu choice");
                return Err(IdeError::InputClosed);
            }
        };

        let choice = Choice::parse(&input);
        tracing::debug!("Dispatching menu choice: {}", choice);

        self.terminal.write_line(choice.response())?;
        self.monitor.record(&choice);

        Ok(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Records every write as a separate entry.
    #[derive(Default)]
    struct ScriptedTerminal {
        inputs: VecDeque<String>,
        lines: Vec<String>,
        prompts: usize,
    }

    impl ScriptedTerminal {
        fn with_inputs(inputs: &[&str]) -> Self {
            Self {
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            }
        }
    }

    impl Terminal for ScriptedTerminal {
        fn write_line(&mut self, line: &str) -> Result<()> {
            self.lines.push(line.to_string());
            Ok(())
        }

        fn prompt(&mut self, _prompt: &str) -> Result<Option<String>> {
            self.prompts += 1;
            Ok(self.inputs.pop_front())
        }
    }

    #[test]
    fn test_exit_immediately() {
        let mut engine = IdeEngine::new(ScriptedTerminal::with_inputs(&["3"]));
        let summary = engine.run().unwrap();

        assert_eq!(engine.state(), MenuState::Terminated);
        assert_eq!(summary.iterations, 1);
        assert!(summary.exited);

        let terminal = engine.into_terminal();
        assert_eq!(terminal.prompts, 1);
        assert_eq!(terminal.lines.first().map(String::as_str), Some(BANNER));
        assert_eq!(
            terminal.lines.last().map(String::as_str),
            Some("Exiting IDE. Goodbye!")
        );
    }

    #[test]
    fn test_banner_once_menu_every_iteration() {
        let mut engine = IdeEngine::new(ScriptedTerminal::with_inputs(&["1", "2", "x", "3"]));
        engine.run().unwrap();

        let terminal = engine.into_terminal();
        let banners = terminal.lines.iter().filter(|l| *l == BANNER).count();
        let menus = terminal.lines.iter().filter(|l| *l == "Menu:").count();
        assert_eq!(banners, 1);
        assert_eq!(menus, 4);
        assert_eq!(terminal.prompts, 4);
    }

    #[test]
    fn test_input_closed_before_exit() {
        let mut engine = IdeEngine::new(ScriptedTerminal::with_inputs(&["1"]));
        let err = engine.run().unwrap_err();

        assert!(matches!(err, IdeError::InputClosed));
        assert_eq!(engine.state(), MenuState::Running);

        let terminal = engine.into_terminal();
        assert!(!terminal.lines.iter().any(|l| l == "Exiting IDE. Goodbye!"));
    }

    #[test]
    fn test_summary_counts() {
        let mut engine = IdeEngine::new_with_monitoring(
            ScriptedTerminal::with_inputs(&["", "2", "4", "2", "3", "1"]),
            true,
        );
        let summary = engine.run().unwrap();

        assert_eq!(summary.iterations, 5);
        assert_eq!(summary.build_requests, 2);
        assert_eq!(summary.invalid_choices, 2);
        assert_eq!(summary.edit_requests, 0);

        // 選擇離開後不再讀取輸入
        assert_eq!(engine.into_terminal().inputs, vec!["1".to_string()]);
    }
}
