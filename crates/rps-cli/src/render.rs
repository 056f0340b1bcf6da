//! Text rendering for the terminal front end

use rps_logic::{Choice, HistoryEntry, HistoryLog, MatchResult, MatchSnapshot, Outcome, RoundResult};

pub fn choice_label(choice: Choice) -> &'static str {
    match choice {
        Choice::Rock => "🪨 Rock",
        Choice::Paper => "📄 Paper",
        Choice::Scissors => "✂️ Scissors",
    }
}

pub fn round_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "You win this round! 🎉",
        Outcome::Lose => "You lose this round. 😅",
        Outcome::Draw => "Draw. 🤝",
    }
}

pub fn match_message(result: MatchResult) -> &'static str {
    match result {
        MatchResult::PlayerWins => "You won the match! 🏆",
        MatchResult::OpponentWins => "The computer won the match. 🤖",
        MatchResult::MatchDraw => "The match ended in a draw. 🤝",
    }
}

pub fn scoreboard(state: &MatchSnapshot) -> String {
    format!(
        "You {} | Computer {} | Draws {} | Round {} / {}",
        state.player_score,
        state.opponent_score,
        state.draw_count,
        state.rounds_played,
        state.max_rounds
    )
}

pub fn round_report(round: &RoundResult) -> String {
    let mut lines = vec![
        format!(
            "{} vs {}",
            choice_label(round.player_choice),
            choice_label(round.opponent_choice)
        ),
        round_message(round.outcome).to_string(),
        scoreboard(&round.state),
    ];
    if let Some(result) = round.state.result {
        lines.push(match_message(result).to_string());
    }
    lines.join("\n")
}

pub fn history_line(entry: &HistoryEntry) -> String {
    let result = match entry.outcome {
        Outcome::Win => "Won",
        Outcome::Lose => "Lost",
        Outcome::Draw => "Draw",
    };
    format!(
        "Round {}: {} vs {} - {}",
        entry.round_number,
        choice_label(entry.player_choice),
        choice_label(entry.opponent_choice),
        result
    )
}

/// Latest round first
pub fn history(log: &HistoryLog) -> String {
    if log.is_empty() {
        return "History is empty.".to_string();
    }
    log.newest_first().map(history_line).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_logic::{MatchConfig, ScriptedOpponent, Session};

    #[test]
    fn test_round_report_includes_match_message_on_completion() {
        let mut session = Session::with_selector(
            MatchConfig::single_round(),
            ScriptedOpponent::always(Choice::Paper),
        );
        let round = session.play_round(Choice::Scissors).unwrap();
        let report = round_report(&round);

        assert!(report.contains("✂️ Scissors vs 📄 Paper"));
        assert!(report.contains("You win this round!"));
        assert!(report.contains("Round 1 / 1"));
        assert!(report.contains("You won the match!"));
    }

    #[test]
    fn test_round_report_without_result_mid_match() {
        let mut session =
            Session::with_selector(MatchConfig::default(), ScriptedOpponent::always(Choice::Rock));
        let round = session.play_round(Choice::Scissors).unwrap();
        let report = round_report(&round);

        assert!(report.contains("You lose this round."));
        assert!(report.contains("You 0 | Computer 1 | Draws 0 | Round 1 / 5"));
        assert!(!report.contains("match"));
    }

    #[test]
    fn test_history_newest_first() {
        let mut session = Session::with_selector(
            MatchConfig::default(),
            ScriptedOpponent::always(Choice::Rock),
        );
        session.play_round(Choice::Paper).unwrap();
        session.play_round(Choice::Rock).unwrap();

        let text = history(session.history_log());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Round 2"));
        assert!(lines[0].ends_with("Draw"));
        assert!(lines[1].starts_with("Round 1"));
        assert!(lines[1].ends_with("Won"));
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(history(&HistoryLog::new()), "History is empty.");
    }
}
