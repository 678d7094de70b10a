/// What the user is expected to type for a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerShape {
    /// One non-negative integer.
    Single,
    /// A quotient, optionally followed by a remainder.
    QuotientRemainder,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Answer {
    Single(u64),
    QuotientRemainder(u64, Option<u64>),
}

/// Parses a line of user input. Anything that does not fit `shape` gives
/// `None`, which callers compare like any other wrong answer.
pub fn parse_answer(input: &str, shape: AnswerShape) -> Option<Answer> {
    let mut fields = input.split_whitespace().map(parse_natural);
    let first = fields.next()??;
    match shape {
        AnswerShape::Single => match fields.next() {
            None => Some(Answer::Single(first)),
            Some(_) => None,
        },
        AnswerShape::QuotientRemainder => {
            let second = match fields.next() {
                None => None,
                Some(value) => Some(value?),
            };
            if fields.next().is_some() {
                return None;
            }
            Some(Answer::QuotientRemainder(first, second))
        }
    }
}

// Digits only: no sign, no decimal point.
fn parse_natural(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
