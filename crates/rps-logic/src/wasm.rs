//! WASM bindings for the browser front end

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{resolve_round, Choice, GameError, MatchConfig, Session};

fn parse_choice(choice: &str) -> Result<Choice, JsError> {
    choice.parse::<Choice>().map_err(to_js_error)
}

fn to_js_error(err: GameError) -> JsError {
    JsError::new(&err.to_string())
}

fn to_js_value<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// One player's game session, owned by the page
#[wasm_bindgen]
pub struct WasmSession {
    inner: Session,
}

#[wasm_bindgen]
impl WasmSession {
    /// Create a session; `max_rounds` defaults to 5 when omitted
    #[wasm_bindgen(constructor)]
    pub fn new(max_rounds: Option<u32>) -> Result<WasmSession, JsError> {
        let config = match max_rounds {
            Some(n) => MatchConfig::new(n).map_err(to_js_error)?,
            None => MatchConfig::default(),
        };
        Ok(WasmSession { inner: Session::new(config) })
    }

    /// Play a round with the player's choice ("rock", "paper", "scissors"
    /// or the Spanish names).
    ///
    /// # Returns
    /// RoundResult as a JS object. Throws once the match is complete.
    #[wasm_bindgen(js_name = playRound)]
    pub fn play_round(&mut self, choice: &str) -> Result<JsValue, JsError> {
        let player = parse_choice(choice)?;
        let round = self.inner.play_round(player).map_err(to_js_error)?;
        to_js_value(&round)
    }

    #[wasm_bindgen(js_name = resetScores)]
    pub fn reset_scores(&mut self) {
        self.inner.reset_scores();
    }

    #[wasm_bindgen(js_name = resetAll)]
    pub fn reset_all(&mut self) {
        self.inner.reset_all();
    }

    /// Current MatchSnapshot as a JS object
    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js_value(&self.inner.state())
    }

    /// History entries in chronological order
    pub fn history(&self) -> Result<JsValue, JsError> {
        to_js_value(&self.inner.history())
    }
}

/// Resolve a single round without a session ("Win", "Lose" or "Draw")
#[wasm_bindgen]
pub fn resolve(player: &str, opponent: &str) -> Result<String, JsError> {
    let outcome = resolve_round(parse_choice(player)?, parse_choice(opponent)?);
    Ok(format!("{:?}", outcome))
}
