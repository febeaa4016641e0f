//! Session loop integration tests
//!
//! Drives the full questionnaire through scripted line input against the
//! mock scoring service, asserting on the rendered views and on what
//! reached the wire.

mod helpers;

use helpers::{failing_service, realista_result, scoring_service, spawn_mock, CapturedAnswers};
use rumo_cli::scoring::ScoringClient;
use rumo_cli::session::{run_session, SessionEnd};
use rumo_core::catalog::TOTAL_QUESTIONS;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

fn script(lines: &[&str]) -> Cursor<Vec<u8>> {
    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    Cursor::new(text.into_bytes())
}

fn answers(raw: &str, count: usize) -> Vec<&str> {
    vec![raw; count]
}

#[tokio::test]
async fn all_threes_traversal_completes_with_service_result() {
    let captured: CapturedAnswers = Arc::new(Mutex::new(Vec::new()));
    let base = spawn_mock(scoring_service(realista_result(), captured.clone())).await;
    let client = ScoringClient::new(base).unwrap();

    let mut input = script(&answers("3", TOTAL_QUESTIONS));
    let mut output = Vec::new();

    let end = run_session(&client, &mut input, &mut output).await.unwrap();
    assert_eq!(end, SessionEnd::Completed(realista_result()));

    // Exactly one submission of [3; 48]
    let received = captured.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0], vec![3u8; TOTAL_QUESTIONS]);

    let rendered = String::from_utf8(output).unwrap();
    assert!(rendered.contains("Bloco 1 de 6"));
    assert!(rendered.contains("Bloco 6 de 6"));
    assert!(rendered.contains("Analisando seu perfil"));
    assert!(rendered.contains("Realista"));
    assert!(rendered.contains("Carreiras Sugeridas"));
}

#[tokio::test]
async fn invalid_input_reprompts_without_losing_progress() {
    let captured: CapturedAnswers = Arc::new(Mutex::new(Vec::new()));
    let base = spawn_mock(scoring_service(realista_result(), captured.clone())).await;
    let client = ScoringClient::new(base).unwrap();

    // First prompt answered badly twice before a valid answer
    let mut lines = vec!["9", "abc", "5"];
    lines.extend(answers("3", TOTAL_QUESTIONS - 1));
    let mut input = script(&lines);
    let mut output = Vec::new();

    let end = run_session(&client, &mut input, &mut output).await.unwrap();
    assert_eq!(end, SessionEnd::Completed(realista_result()));

    let received = captured.lock().unwrap();
    assert_eq!(received[0][0], 5, "valid retry answer recorded");
    assert_eq!(&received[0][1..], &vec![3u8; TOTAL_QUESTIONS - 1][..]);

    let rendered = String::from_utf8(output).unwrap();
    assert!(rendered.contains("responda com um número de 1 a 5"));
}

#[tokio::test]
async fn failure_renders_error_view_and_quit_ends_session() {
    let base = spawn_mock(failing_service()).await;
    let client = ScoringClient::new(base).unwrap();

    let mut lines = answers("3", TOTAL_QUESTIONS);
    lines.push("x"); // unknown choice re-renders the error view
    lines.push("q");
    let mut input = script(&lines);
    let mut output = Vec::new();

    let end = run_session(&client, &mut input, &mut output).await.unwrap();
    assert_eq!(end, SessionEnd::Quit);

    let rendered = String::from_utf8(output).unwrap();
    assert!(rendered.contains("Erro ao Processar"));
    assert!(rendered.contains("tente novamente"));
    // Error view rendered twice: once initially, once after the unknown choice
    assert_eq!(rendered.matches("Erro ao Processar").count(), 2);
}

#[tokio::test]
async fn retry_after_failure_restarts_from_block_one() {
    let base = spawn_mock(failing_service()).await;
    let client = ScoringClient::new(base).unwrap();

    let mut lines = answers("3", TOTAL_QUESTIONS);
    lines.push("r"); // retry
    lines.push("q"); // quit at the first prompt of the fresh session
    let mut input = script(&lines);
    let mut output = Vec::new();

    let end = run_session(&client, &mut input, &mut output).await.unwrap();
    assert_eq!(end, SessionEnd::Quit);

    let rendered = String::from_utf8(output).unwrap();
    assert_eq!(
        rendered.matches("Bloco 1 de 6").count(),
        2,
        "block 1 rendered again after retry"
    );
}

#[tokio::test]
async fn end_of_input_quits_mid_block() {
    let base = spawn_mock(failing_service()).await;
    let client = ScoringClient::new(base).unwrap();

    let mut input = script(&answers("3", 5));
    let mut output = Vec::new();

    let end = run_session(&client, &mut input, &mut output).await.unwrap();
    assert_eq!(end, SessionEnd::Quit);
}
