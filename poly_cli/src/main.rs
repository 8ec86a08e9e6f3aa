use clap::{Parser, Subcommand, ValueEnum};
use gf2_poly::demo::sample_session;
use gf2_poly::{evaluate, Direction, Notation, Operation, Outcome, PolyError, Polynomial};

#[derive(Parser, Debug)]
#[command(name = "gf2poly", version, about = "Arithmetic over GF(2)[x] polynomials")]
struct Cli {
    /// Read digits from the lowest exponent to the highest
    #[arg(long, global = true)]
    ascending: bool,

    /// How results are printed
    #[arg(long, value_enum, default_value_t = NotationArg::Both, global = true)]
    notation: NotationArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum NotationArg {
    Polynomial,
    Binary,
    Both,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// a + b
    Add { a: String, b: String },
    /// a * b
    Mul { a: String, b: String },
    /// Quotient and remainder of a / b
    Div { a: String, b: String },
    /// Shift left by n bits (negative n shifts right)
    Shl {
        a: String,
        #[arg(allow_negative_numbers = true)]
        n: isize,
    },
    /// Shift right by n bits (negative n shifts left)
    Shr {
        a: String,
        #[arg(allow_negative_numbers = true)]
        n: isize,
    },
    /// Both renderings and the integer value
    Show { a: String },
    /// Compare a and b by value
    Cmp { a: String, b: String },
    /// Print the sample session
    Demo,
}

fn print_poly(label: &str, p: &Polynomial, notation: NotationArg) {
    match notation {
        NotationArg::Polynomial => println!("{:<12}{}", label, p.display(Notation::Polynomial)),
        NotationArg::Binary => println!("{:<12}{}", label, p.display(Notation::Binary)),
        NotationArg::Both => {
            println!("{:<12}{}", label, p.display(Notation::Polynomial));
            println!("{:<12}{}", "", p.display(Notation::Binary));
        }
    }
}

fn run_binary(
    op: Operation,
    a: &Polynomial,
    b: &Polynomial,
    notation: NotationArg,
) -> Result<(), PolyError> {
    log::debug!("Running {} on {} and {}", op, a, b);
    match evaluate(op, a, b)? {
        Outcome::Single(result) => print_poly("result:", &result, notation),
        Outcome::Division {
            quotient,
            remainder,
        } => {
            print_poly("quotient:", &quotient, notation);
            print_poly("remainder:", &remainder, notation);
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Parsed arguments: {:?}", cli);

    let direction = if cli.ascending {
        Direction::LsbFirst
    } else {
        Direction::MsbFirst
    };
    let parse = |s: &str| Polynomial::parse_with(direction, s);

    match &cli.command {
        Command::Add { a, b } => {
            run_binary(Operation::Addition, &parse(a), &parse(b), cli.notation)?
        }
        Command::Mul { a, b } => {
            run_binary(Operation::Multiplication, &parse(a), &parse(b), cli.notation)?
        }
        Command::Div { a, b } => {
            run_binary(Operation::Division, &parse(a), &parse(b), cli.notation)?
        }
        Command::Shl { a, n } => print_poly("result:", &parse(a).shift_left(*n), cli.notation),
        Command::Shr { a, n } => print_poly("result:", &parse(a).shift_right(*n), cli.notation),
        Command::Show { a } => {
            let p = parse(a);
            print_poly("value:", &p, cli.notation);
            println!("{:<12}{}", "decimal:", p.to_biguint());
            match p.to_int() {
                Ok(v) => println!("{:<12}{}", "int32:", v),
                Err(e) => {
                    log::warn!("Integer conversion failed: {}", e);
                    println!("{:<12}{}", "int32:", e);
                }
            }
        }
        Command::Cmp { a, b } => {
            let (a, b) = (parse(a), parse(b));
            let relation = match Polynomial::compare(&a, &b) {
                -1 => "a < b",
                0 => "a = b",
                _ => "a > b",
            };
            println!("{}", relation);
        }
        Command::Demo => {
            for (label, value) in sample_session()? {
                println!("{:<20} {:<20}", label, value);
            }
        }
    }

    log::info!("Done");
    Ok(())
}
