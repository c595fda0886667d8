#![allow(dead_code)]

use anyhow::{bail, Result};
use roster::db::db::Db;
use roster::libs::config::DatabaseLocation;
use roster::libs::messages::Message;
use roster::libs::prompt::Prompt;
use std::collections::VecDeque;
use std::io;
use tempfile::TempDir;
use test_context::TestContext;

/// A fresh database file in its own temporary directory.
pub struct DbContext {
    pub db: Db,
    _temp_dir: TempDir,
}

impl TestContext for DbContext {
    fn setup() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let location = DatabaseLocation::File(temp_dir.path().join("roster.db"));
        let db = Db::open(&location).unwrap();
        DbContext { db, _temp_dir: temp_dir }
    }
}

#[derive(Debug)]
pub enum Answer {
    Text(&'static str),
    Choice(usize),
    Interrupt,
}

/// Plays back canned answers and records every question asked.
pub struct ScriptedPrompt {
    answers: VecDeque<Answer>,
    pub asked: Vec<String>,
    pub offered: Vec<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            asked: Vec::new(),
            offered: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    pub fn times_asked(&self, message: Message) -> usize {
        let text = message.to_string();
        self.asked.iter().filter(|asked| **asked == text).count()
    }
}

impl Prompt for ScriptedPrompt {
    fn text(&mut self, message: Message) -> Result<String> {
        self.asked.push(message.to_string());
        match self.answers.pop_front() {
            Some(Answer::Text(text)) => Ok(text.to_string()),
            Some(Answer::Interrupt) => Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted").into()),
            other => bail!("expected a text answer for '{}', got {:?}", message, other),
        }
    }

    fn select(&mut self, message: Message, items: &[String]) -> Result<usize> {
        self.asked.push(message.to_string());
        self.offered.push(items.to_vec());
        match self.answers.pop_front() {
            Some(Answer::Choice(index)) => Ok(index),
            Some(Answer::Interrupt) => Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted").into()),
            other => bail!("expected a choice for '{}', got {:?}", message, other),
        }
    }
}
