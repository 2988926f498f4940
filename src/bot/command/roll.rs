use rand::Rng;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    ResolvedValue,
};

use crate::error::AppError;

pub const NAME: &str = "roll";

const DEFAULT_LOW: i64 = 1;
const DEFAULT_HIGH: i64 = 100;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Random number from 1 to 100")
        .add_option(CreateCommandOption::new(CommandOptionType::Integer, "low", "From").required(false))
        .add_option(CreateCommandOption::new(CommandOptionType::Integer, "high", "To").required(false))
}

pub async fn run(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let mut low = DEFAULT_LOW;
    let mut high = DEFAULT_HIGH;

    for option in command.data.options() {
        match (option.name, option.value) {
            ("low", ResolvedValue::Integer(value)) => low = value,
            ("high", ResolvedValue::Integer(value)) => high = value,
            _ => {}
        }
    }

    let number = roll(low, high, &mut rand::rng());

    super::respond(ctx, command, number.to_string()).await
}

/// Uniform integer in `low..=high`. Reversed bounds are swapped.
pub fn roll<R: Rng + ?Sized>(low: i64, high: i64, rng: &mut R) -> i64 {
    let (low, high) = if low <= high { (low, high) } else { (high, low) };
    rng.random_range(low..=high)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let n = roll(1, 6, &mut rng);
            assert!((1..=6).contains(&n));
        }
    }

    #[test]
    fn swaps_reversed_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let n = roll(10, -10, &mut rng);
            assert!((-10..=10).contains(&n));
        }
    }

    #[test]
    fn single_value_range() {
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(roll(7, 7, &mut rng), 7);
    }
}
