// Copyright 2025 the Openings Treemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted input events, standing in for a windowing system's event queue.

use std::str::FromStr;

use anyhow::{Context, Error, anyhow, bail};
use kurbo::{Point, Rect};

/// One input event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// `click:X,Y`
    Click(Point),
    /// `key:C`
    Key(char),
    /// `resize:W,H`
    Resize(Rect),
}

impl FromStr for Event {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, arg) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("event {s:?} is not of the form kind:argument"))?;
        match kind {
            "click" => {
                let (x, y) = pair(arg)?;
                Ok(Self::Click(Point::new(x, y)))
            }
            "key" => {
                let mut chars = arg.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Self::Key(c)),
                    _ => bail!("key event needs exactly one character, got {arg:?}"),
                }
            }
            "resize" => {
                let (w, h) = pair(arg)?;
                Ok(Self::Resize(Rect::new(0.0, 0.0, w, h)))
            }
            other => bail!("unknown event kind {other:?}"),
        }
    }
}

fn pair(arg: &str) -> anyhow::Result<(f64, f64)> {
    let (a, b) = arg
        .split_once(',')
        .ok_or_else(|| anyhow!("expected two comma-separated numbers, got {arg:?}"))?;
    let a = a.trim().parse().with_context(|| format!("bad number {a:?}"))?;
    let b = b.trim().parse().with_context(|| format!("bad number {b:?}"))?;
    Ok((a, b))
}

#[cfg(test)]
mod tests {
    use super::Event;
    use kurbo::{Point, Rect};

    #[test]
    fn parses_each_kind() {
        assert_eq!(
            "click:10,20.5".parse::<Event>().unwrap(),
            Event::Click(Point::new(10.0, 20.5))
        );
        assert_eq!("key:o".parse::<Event>().unwrap(), Event::Key('o'));
        assert_eq!(
            "resize:640, 480".parse::<Event>().unwrap(),
            Event::Resize(Rect::new(0.0, 0.0, 640.0, 480.0))
        );
    }

    #[test]
    fn rejects_malformed_events() {
        assert!("click".parse::<Event>().is_err());
        assert!("click:1".parse::<Event>().is_err());
        assert!("click:a,b".parse::<Event>().is_err());
        assert!("key:ox".parse::<Event>().is_err());
        assert!("scroll:1,2".parse::<Event>().is_err());
    }
}
