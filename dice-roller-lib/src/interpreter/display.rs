use crate::interpreter::error::{InfinityError, RollError};
use crate::interpreter::evaluator::TraceEntry;

/// Replays an evaluation trace into a readable expression where every dice term
/// is replaced by the faces it rolled, e.g. `[ 3, 1 ] + ( 2 * [ 4 ] )`.
///
/// Every operation is wrapped in parentheses except the outermost one.
///
/// # Arguments
///
/// * `trace`: The operands and operators of an evaluation, in postfix order.
///
/// returns: The annotated expression.
///
/// # Examples
///
/// ```
/// use dice_roller::interpreter::display::build_roll_string;
/// use dice_roller::interpreter::evaluator::TraceEntry;
/// use dice_roller::interpreter::operator::BinaryOperator;
/// # use dice_roller::interpreter::error::RollError;
///
/// # fn main() -> Result<(), RollError> {
/// let trace = vec![
///     TraceEntry::Rolls(vec![3, 1]),
///     TraceEntry::Number(2.0),
///     TraceEntry::Operator(BinaryOperator::Add),
/// ];
/// assert_eq!(build_roll_string(&trace)?, "[ 3, 1 ] + 2");
/// # Ok(()) }
/// ```
pub fn build_roll_string(trace: &[TraceEntry]) -> Result<String, RollError> {
    let mut fragments: Vec<String> = Vec::new();
    let last_index = trace.len().saturating_sub(1);

    for (index, entry) in trace.iter().enumerate() {
        match entry {
            TraceEntry::Number(_) | TraceEntry::Rolls(_) => fragments.push(entry.to_string()),
            TraceEntry::Operator(operator) => {
                let second = fragments.pop().ok_or(InfinityError::Unresolved)?;
                let first = fragments.pop().ok_or(InfinityError::Unresolved)?;

                let combined = if index == last_index {
                    format!("{} {} {}", first, operator, second)
                } else {
                    format!("( {} {} {} )", first, operator, second)
                };
                fragments.push(combined);
            }
        }
    }

    Ok(fragments.pop().ok_or(InfinityError::Unresolved)?)
}
