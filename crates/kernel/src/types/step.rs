use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Next => write!(f, "next"),
            Step::Previous => write!(f, "previous"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    #[error("empty move script")]
    Empty,
    #[error("unknown step `{0}`")]
    UnknownStep(String),
    #[error(transparent)]
    InvalidCount(#[from] std::num::ParseIntError),
}

impl FromStr for Step {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" | "next" | ">" => Ok(Self::Next),
            "p" | "prev" | "previous" | "<" => Ok(Self::Previous),
            _ => Err(Self::Err::UnknownStep(s.to_owned())),
        }
    }
}

/// A sequence of steps, written as tokens such as `n3 p2 >`.
///
/// Tokens are separated by whitespace or commas. A trailing number repeats
/// the step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveScript {
    moves: Vec<(Step, usize)>,
}

impl FromStr for MoveScript {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let moves = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(parse_move)
            .collect::<Result<Vec<_>, _>>()?;
        if moves.is_empty() {
            return Err(Self::Err::Empty);
        }
        Ok(Self { moves })
    }
}

fn parse_move(token: &str) -> Result<(Step, usize), MoveParseError> {
    let split = token
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(token.len());
    let (step, count) = token.split_at(split);
    let step = step.parse::<Step>()?;
    let count = if count.is_empty() {
        1
    } else {
        count.parse::<usize>()?
    };
    Ok((step, count))
}

impl fmt::Display for MoveScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (step, count)) in self.moves.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let short = match step {
                Step::Next => "n",
                Step::Previous => "p",
            };
            write!(f, "{short}{count}")?;
        }
        Ok(())
    }
}

impl MoveScript {
    /// Steps in order, with repeats expanded.
    pub fn steps(&self) -> impl Iterator<Item = Step> + '_ {
        self.moves
            .iter()
            .flat_map(|&(step, count)| std::iter::repeat(step).take(count))
    }

    pub fn len(&self) -> usize {
        self.moves
            .iter()
            .fold(0usize, |len, &(_, count)| len.saturating_add(count))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_script() {
        fn p(s: &str) -> String {
            s.parse::<MoveScript>().unwrap().to_string()
        }
        assert_eq!(p("n"), "n1");
        assert_eq!(p("n3 p2"), "n3 p2");
        assert_eq!(p("next,prev, >2  <"), "n1 p1 n2 p1");
    }

    #[test]
    fn expand_steps() {
        use Step::*;

        let script = "n2 p n0 >".parse::<MoveScript>().unwrap();
        assert_eq!(script.len(), 4);
        assert_eq!(
            script.steps().collect::<Vec<_>>(),
            [Next, Next, Previous, Next]
        );
    }

    #[test]
    fn huge_counts_saturate() {
        let script = "n18446744073709551615 n1".parse::<MoveScript>().unwrap();
        assert_eq!(script.len(), usize::MAX);
        assert!(!script.is_empty());
    }

    #[test]
    fn reject_bad_scripts() {
        assert_eq!("".parse::<MoveScript>(), Err(MoveParseError::Empty));
        assert_eq!(" , ".parse::<MoveScript>(), Err(MoveParseError::Empty));
        assert_eq!(
            "n2 x".parse::<MoveScript>(),
            Err(MoveParseError::UnknownStep("x".to_owned()))
        );
        assert!(matches!(
            "n99999999999999999999999".parse::<MoveScript>(),
            Err(MoveParseError::InvalidCount(_))
        ));
        assert_eq!(
            "3".parse::<MoveScript>(),
            Err(MoveParseError::UnknownStep(String::new()))
        );
    }
}
