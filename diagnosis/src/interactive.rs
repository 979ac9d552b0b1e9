//! Interactive quiz loop for `diagnosis run`.
//!
//! The terminal rendition of the page's diagnosis card: progress bar,
//! numbered options, result card with reasons and the booking link, restart
//! on request.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, anyhow};

use crate::content::{Question, QuestionBank, ResultCatalog, ResultEntry};
use crate::core::session::DiagnosisSession;
use crate::core::types::Category;
use crate::io::config::SiteConfig;

const BAR_WIDTH: usize = 20;

/// Drive one or more diagnosis sessions over the given reader/writer.
///
/// Returns cleanly when input ends or the visitor declines a restart.
/// Injected I/O keeps the loop testable the same way the engine is.
pub fn run_quiz<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    bank: &QuestionBank,
    catalog: &ResultCatalog,
    config: &SiteConfig,
) -> Result<()> {
    writeln!(output, "{} コース診断", config.salon_name)?;
    writeln!(
        output,
        "{}つの質問で、今のあなたに最適なメニューをご提案します。",
        bank.len()
    )?;

    let mut session = DiagnosisSession::new(bank);
    loop {
        let Some(question) = session.current_question() else {
            // Completed: show the result card, then offer a restart.
            let result = session
                .result()
                .ok_or_else(|| anyhow!("session has no question and no result"))?;
            let entry = catalog
                .entry(result)
                .with_context(|| format!("result catalog missing entry for '{result}'"))?;
            write_result_card(&mut output, entry, config)?;

            writeln!(output)?;
            write!(output, "診断をやり直しますか？ [y/N] ")?;
            output.flush()?;
            match read_line(&mut input)? {
                Some(line) if line.eq_ignore_ascii_case("y") => {
                    session.reset();
                    writeln!(output)?;
                    continue;
                }
                _ => return Ok(()),
            }
        };

        writeln!(output)?;
        writeln!(
            output,
            "{} QUESTION {}/{}",
            progress_bar(session.progress(), BAR_WIDTH),
            session.index() + 1,
            session.question_count()
        )?;
        writeln!(output, "{}", question.prompt)?;
        for (position, option) in question.options.iter().enumerate() {
            writeln!(output, "  {}) {}", position + 1, option.label)?;
        }
        write!(output, "番号を入力 (1-{}): ", question.options.len())?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            // Input ended mid-quiz; the abandoned session needs no teardown.
            writeln!(output)?;
            return Ok(());
        };
        let Some(category) = pick_category(question, &line) else {
            writeln!(output, "1から{}の番号を入力してください。", question.options.len())?;
            continue;
        };

        session
            .submit_answer(category)
            .with_context(|| format!("submit answer for question {}", question.id))?;
    }
}

/// Map a typed line to the chosen option's category, if valid.
fn pick_category(question: &Question, line: &str) -> Option<Category> {
    let choice: usize = line.trim().parse().ok()?;
    if choice == 0 || choice > question.options.len() {
        return None;
    }
    Some(question.options[choice - 1].category)
}

fn write_result_card<W: Write>(
    output: &mut W,
    entry: &ResultEntry,
    config: &SiteConfig,
) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "あなたにおすすめのコース")?;
    writeln!(output, "  {}  {}", entry.name, entry.price)?;
    writeln!(output, "おすすめの理由:")?;
    for reason in &entry.reasons {
        writeln!(output, "  ✓ {reason}")?;
    }
    writeln!(output, "{}", entry.description)?;
    writeln!(output, "ご予約はこちら: {}", config.booking_url)?;
    Ok(())
}

fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    let mut bar = String::with_capacity(width);
    for position in 0..width {
        bar.push(if position < filled { '█' } else { '░' });
    }
    bar
}

/// Read one line, `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line).context("read stdin")?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::DiagnosisContent;
    use std::io::Cursor;

    fn run_with(input: &str) -> String {
        let (bank, catalog) = DiagnosisContent::bundled().into_parts();
        let config = SiteConfig::default();
        let mut output = Vec::new();
        run_quiz(Cursor::new(input), &mut output, &bank, &catalog, &config).expect("run");
        String::from_utf8(output).expect("utf8 output")
    }

    /// Picking the first option everywhere answers A five times → relax.
    #[test]
    fn all_first_options_recommend_the_relax_course() {
        let transcript = run_with("1\n1\n1\n1\n1\nn\n");
        assert!(transcript.contains("QUESTION 1/5"));
        assert!(transcript.contains("QUESTION 5/5"));
        assert!(transcript.contains("森の深眠コース 90分"));
        assert!(transcript.contains(&SiteConfig::default().booking_url));
    }

    #[test]
    fn invalid_input_reprompts_without_advancing() {
        let transcript = run_with("9\nx\n1\n1\n1\n1\n1\n");
        assert!(transcript.contains("番号を入力してください"));
        // The first question is re-asked for both bad inputs, and the quiz
        // still makes exactly one pass through the rest.
        assert_eq!(transcript.matches("QUESTION 1/5").count(), 3);
        assert_eq!(transcript.matches("QUESTION 2/5").count(), 1);
        assert!(transcript.contains("あなたにおすすめのコース"));
    }

    #[test]
    fn end_of_input_mid_quiz_exits_cleanly() {
        let transcript = run_with("1\n1\n");
        assert!(transcript.contains("QUESTION 3/5"));
        assert!(!transcript.contains("あなたにおすすめのコース"));
    }

    /// A restart resets the session and asks from the first question again.
    #[test]
    fn restart_runs_a_second_session() {
        let transcript = run_with("1\n1\n1\n1\n1\ny\n2\n2\n2\n2\n2\nn\n");
        assert_eq!(transcript.matches("QUESTION 1/5").count(), 2);
        // Second run answers B everywhere → hair course.
        assert!(transcript.contains("水素髪質改善 90分"));
    }

    #[test]
    fn progress_bar_fills_with_fraction() {
        assert_eq!(progress_bar(0.0, 4), "░░░░");
        assert_eq!(progress_bar(0.5, 4), "██░░");
        assert_eq!(progress_bar(1.0, 4), "████");
    }
}
