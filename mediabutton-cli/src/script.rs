use std::time::Duration;

use anyhow::{Context, anyhow, bail};
use mediabutton_core::{KeyAction, KeyEvent, SessionEvent};

/// One line of an event script
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    Sleep(Duration),
    Event(SessionEvent),
}

/// Parse a script line. Blank lines and `#` comments yield `None`.
///
/// ```text
/// up headset-hook      # key-up, by key name or raw code
/// down 85
/// sleep 200            # milliseconds
/// seek 90000
/// media-id ep_42
/// search dune
/// custom change_speed
/// play | pause | stop | prepare | next | previous | fast-forward | rewind
/// ```
pub fn parse_line(line: &str) -> anyhow::Result<Option<ScriptStep>> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let argument = || -> Option<String> { (!rest.is_empty()).then(|| rest.to_string()) };

    let step = match word {
        "sleep" => ScriptStep::Sleep(Duration::from_millis(
            rest.parse().with_context(|| format!("bad sleep duration {:?}", rest))?,
        )),
        "up" => ScriptStep::Event(SessionEvent::MediaButton(Some(KeyEvent::up(key_code(rest)?)))),
        "down" => {
            ScriptStep::Event(SessionEvent::MediaButton(Some(KeyEvent::down(key_code(rest)?))))
        }
        "seek" => ScriptStep::Event(SessionEvent::SeekTo(
            rest.parse().with_context(|| format!("bad seek position {:?}", rest))?,
        )),
        "media-id" => ScriptStep::Event(SessionEvent::PlayFromMediaId(argument())),
        "search" => ScriptStep::Event(SessionEvent::PlayFromSearch(argument())),
        "prepare-search" => ScriptStep::Event(SessionEvent::PrepareFromSearch(argument())),
        "custom" if !rest.is_empty() => {
            ScriptStep::Event(SessionEvent::CustomAction(rest.to_string()))
        }
        "prepare" => ScriptStep::Event(SessionEvent::Prepare),
        "play" => ScriptStep::Event(SessionEvent::Play),
        "pause" => ScriptStep::Event(SessionEvent::Pause),
        "stop" => ScriptStep::Event(SessionEvent::Stop),
        "next" => ScriptStep::Event(SessionEvent::SkipToNext),
        "previous" => ScriptStep::Event(SessionEvent::SkipToPrevious),
        "fast-forward" => ScriptStep::Event(SessionEvent::FastForward),
        "rewind" => ScriptStep::Event(SessionEvent::Rewind),
        _ => bail!("unknown script command {:?}", line),
    };
    Ok(Some(step))
}

fn key_code(token: &str) -> anyhow::Result<i32> {
    if let Ok(code) = token.parse::<i32>() {
        return Ok(code);
    }
    token
        .parse::<KeyAction>()
        .map(KeyAction::key_code)
        .map_err(|_| anyhow!("unknown media key {:?}", token))
}
