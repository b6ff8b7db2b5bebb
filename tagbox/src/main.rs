use clap::Parser;
use tagbox::{ArenaError, FloatArena, Value, add};

/// Demo driver for the tagged-word encoding.
#[derive(Parser)]
#[command(name = "tagbox")]
struct Args {
    /// Boxed-float slots available to the demo arena.
    #[arg(long, default_value_t = 16)]
    capacity: usize,
}

fn main() -> Result<(), ArenaError> {
    env_logger::init();
    let args = Args::parse();

    let mut arena = FloatArena::new(args.capacity);

    let ten = Value::from_fixnum(10);
    let five = Value::from_fixnum(5);
    let boxed = Value::from_float(20.5, &mut arena)?;
    let truth = Value::from_boolean(true);

    let exact = add(ten, five, &mut arena)?;
    println!("{ten:?} + {five:?} = {}", exact.as_fixnum());

    let promoted = add(ten, boxed, &mut arena)?;
    println!("{ten:?} + 20.5 = {}", promoted.as_float(&arena));

    let odd = add(truth, ten, &mut arena)?;
    println!(
        "{truth:?} + {ten:?} = {} (booleans read as the float fallback)",
        odd.as_float(&arena)
    );

    println!(
        "arena: {} of {} slots used",
        arena.len(),
        arena.capacity()
    );

    Ok(())
}
