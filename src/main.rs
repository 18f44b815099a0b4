//! nandchip - CLI Entry Point
//!
//! Commands:
//! - `nandchip alu <x> <y> --op x+y` - Evaluate the ALU once
//! - `nandchip table <x> <y>` - Evaluate all 18 canonical operations
//! - `nandchip gates` - Print the elementary gate truth tables
//! - `nandchip explore` - Interactive ALU explorer
//! - `nandchip test` - Built-in self-test

use clap::{Parser, Subcommand};
use log::{debug, info, LevelFilter};
use nandchip::{AluOp, Bus16, ControlWord};

#[derive(Parser)]
#[command(name = "nandchip")]
#[command(author = "Yigit")]
#[command(version = "0.1.0")]
#[command(about = "A 16-bit ALU built gate by gate from a single NAND primitive")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the ALU on two words
    Alu {
        /// x input: decimal (-32768..65535), 0x hex or 0b binary
        #[arg(allow_hyphen_values = true, value_parser = Bus16::parse_literal)]
        x: Bus16,
        /// y input: decimal (-32768..65535), 0x hex or 0b binary
        #[arg(allow_hyphen_values = true, value_parser = Bus16::parse_literal)]
        y: Bus16,
        /// Canonical operation mnemonic, e.g. "x+y", "-x", "x|y" (default: x+y)
        #[arg(short, long, allow_hyphen_values = true, conflicts_with = "control")]
        op: Option<AluOp>,
        /// Raw control bits zx nx zy ny f no, e.g. "000010"
        #[arg(short, long)]
        control: Option<ControlWord>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate every canonical operation on two words
    Table {
        /// x input
        #[arg(allow_hyphen_values = true, value_parser = Bus16::parse_literal)]
        x: Bus16,
        /// y input
        #[arg(allow_hyphen_values = true, value_parser = Bus16::parse_literal)]
        y: Bus16,
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the truth tables of the elementary gates
    Gates,
    /// Interactive ALU explorer
    #[cfg(feature = "tui")]
    Explore {
        /// Initial x input
        #[arg(default_value = "0", allow_hyphen_values = true, value_parser = Bus16::parse_literal)]
        x: Bus16,
        /// Initial y input
        #[arg(default_value = "0", allow_hyphen_values = true, value_parser = Bus16::parse_literal)]
        y: Bus16,
        /// Initial operation
        #[arg(short, long, default_value = "x+y", allow_hyphen_values = true)]
        op: AluOp,
    },
    /// Run the built-in self-test
    Test,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Alu { x, y, op, control, json }) => {
            let control = match (op, control) {
                (Some(op), _) => op.control(),
                (None, Some(control)) => control,
                (None, None) => AluOp::Add.control(),
            };
            evaluate(x, y, control, json);
        }
        Some(Commands::Table { x, y, json }) => {
            print_table(x, y, json);
        }
        Some(Commands::Gates) => {
            print_gates();
        }
        #[cfg(feature = "tui")]
        Some(Commands::Explore { x, y, op }) => {
            explore(x, y, op);
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        None => {
            println!("nandchip v0.1.0");
            println!("A 16-bit ALU built from NAND gates");
            println!();
            println!("Use --help for available commands");
            println!();
            demo_chips();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    if let Err(e) = simple_logger::SimpleLogger::new().with_level(level).init() {
        eprintln!("❌ Failed to initialize logging: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn init_logging(_verbose: u8) {}

/// Everything `alu --json` reports.
#[derive(serde::Serialize)]
struct AluReport {
    x: Bus16,
    y: Bus16,
    control: String,
    operation: Option<AluOp>,
    result: nandchip::AluOutput,
}

fn evaluate(x: Bus16, y: Bus16, control: ControlWord, json: bool) {
    use nandchip::{Alu, Nand};

    let operation = control.operation();
    info!("x={:?} y={:?}", x, y);
    debug!("control {} decodes to {:?}", control, operation);

    let result = Nand::alu(x, y, control);

    if json {
        let report = AluReport {
            x,
            y,
            control: control.to_string(),
            operation,
            result,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("❌ Failed to encode result: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let name = operation.map_or_else(|| "(non-canonical)".to_string(), |op| op.to_string());
    println!("x       = {}  0x{:04X}  {:>6}", x, x.to_u16(), x.to_i16());
    println!("y       = {}  0x{:04X}  {:>6}", y, y.to_u16(), y.to_i16());
    println!("control = {}  {}", control, name);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("out     = {}  0x{:04X}  {:>6}",
        result.out, result.out.to_u16(), result.out.to_i16());
    println!("zr = {}  ng = {}", result.zr, result.ng);
}

/// One row of `table --json`.
#[derive(serde::Serialize)]
struct TableRow {
    op: &'static str,
    control: String,
    result: nandchip::AluOutput,
}

fn print_table(x: Bus16, y: Bus16, json: bool) {
    use nandchip::{Alu, Nand};

    info!("tabulating {} operations for x={:?} y={:?}", AluOp::ALL.len(), x, y);

    let rows: Vec<TableRow> = AluOp::ALL
        .iter()
        .map(|op| TableRow {
            op: op.mnemonic(),
            control: op.control().to_string(),
            result: Nand::compute(x, y, *op),
        })
        .collect();

    if json {
        match serde_json::to_string_pretty(&rows) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("❌ Failed to encode table: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("x = 0x{:04X} ({}), y = 0x{:04X} ({})", x.to_u16(), x.to_i16(), y.to_u16(), y.to_i16());
    println!();
    println!("{:<5} {:<7} {:<17} {:>6} {:>7}  zr ng", "op", "control", "out", "hex", "signed");
    for row in &rows {
        println!("{:<5} {:<7} {:<17} 0x{:04X} {:>7}  {}  {}",
            row.op, row.control, row.result.out.to_string(),
            row.result.out.to_u16(), row.result.out.to_i16(),
            row.result.zr, row.result.ng);
    }
}

fn print_gates() {
    use nandchip::{Bit, Gates, Nand, Primitive, Selectors};

    println!("━━━ Elementary Gates ━━━");
    println!();
    println!(" a b | nand and or xor");
    for a in Bit::ALL {
        for b in Bit::ALL {
            println!(" {} {} |   {}   {}   {}   {}",
                a, b, Nand::nand(a, b), Nand::and(a, b), Nand::or(a, b), Nand::xor(a, b));
        }
    }
    println!();
    println!(" a | not");
    for a in Bit::ALL {
        println!(" {} |  {}", a, Nand::not(a));
    }
    println!();
    println!(" a b s | mux");
    for a in Bit::ALL {
        for b in Bit::ALL {
            for sel in Bit::ALL {
                println!(" {} {} {} |  {}", a, b, sel, Nand::mux(a, b, sel));
            }
        }
    }
    println!();
    println!(" i s | dmux");
    for i in Bit::ALL {
        for sel in Bit::ALL {
            let (out_a, out_b) = Nand::dmux(i, sel);
            println!(" {} {} |  {} {}", i, sel, out_a, out_b);
        }
    }
}

#[cfg(feature = "tui")]
fn explore(x: Bus16, y: Bus16, op: AluOp) {
    use nandchip::run_explorer;

    info!("launching explorer with x={:?} y={:?} op={}", x, y, op);

    if let Err(e) = run_explorer(x, y, op) {
        eprintln!("❌ Explorer error: {}", e);
        std::process::exit(1);
    }
}

fn demo_chips() {
    use nandchip::{Alu, Arithmetic, Bit, Bus2, BusGates, Gates, Nand, Selectors};

    println!("━━━ NAND-to-ALU Demo ━━━");
    println!();

    println!("Gates (every one wired from NAND):");
    println!("  not 1     = {}", Nand::not(Bit::High));
    println!("  1 and 0   = {}", Nand::and(Bit::High, Bit::Low));
    println!("  1 or 0    = {}", Nand::or(Bit::High, Bit::Low));
    println!("  1 xor 1   = {}", Nand::xor(Bit::High, Bit::High));
    println!();

    println!("Buses (index 0 = most significant bit):");
    let a = Bus16::from_u16(0x00FF);
    let b = Bus16::from_u16(0x0F0F);
    println!("  a         = {}", a);
    println!("  b         = {}", b);
    println!("  not16(a)  = {}", Nand::not16(a));
    println!("  and16     = {}", Nand::and16(a, b));
    println!("  or16      = {}", Nand::or16(a, b));
    println!();

    println!("Selectors:");
    let words = [0x000A, 0x000B, 0x000C, 0x000D].map(Bus16::from_u16);
    for k in 0..4u16 {
        let s = Bus2::from_u16(k);
        let out = Nand::mux4way16(words[0], words[1], words[2], words[3], s);
        println!("  mux4way16 sel={} -> 0x{:04X}", s, out.to_u16());
    }
    println!();

    println!("Arithmetic:");
    let x = Bus16::from_i16(12345);
    let y = Bus16::from_i16(6789);
    println!("  {} + {} = {}", x.to_i16(), y.to_i16(), Nand::add16(x, y).to_i16());
    println!("  inc16({}) = {}", x.to_i16(), Nand::inc16(x).to_i16());
    println!("  0xFFFF + 1 = 0x{:04X} (wraps)", Nand::add16(Bus16::from_u16(0xFFFF), Bus16::from_u16(1)).to_u16());
    println!();

    println!("ALU:");
    for op in [AluOp::Add, AluOp::SubXY, AluOp::SubYX, AluOp::And, AluOp::Or, AluOp::NegX] {
        let result = Nand::compute(x, y, op);
        println!("  {:<4} = {:>6}  (zr={} ng={})", op.mnemonic(), result.out.to_i16(), result.zr, result.ng);
    }
    println!();

    println!("✓ Chip set working!");
}

fn run_self_test() {
    use nandchip::{Alu, Arithmetic, Bit, Bus2, Bus3, BusGates, Gates, Nand, Selectors};

    println!("━━━ nandchip Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    let mut check = |name: &str, ok: bool| {
        if ok {
            println!("{}... ✓", name);
            passed += 1;
        } else {
            println!("{}... ✗", name);
            failed += 1;
        }
    };

    // Test 1: Elementary gate truth tables
    let mut ok = true;
    for a in Bit::ALL {
        ok &= Nand::not(a).to_bool() == !a.to_bool();
        for b in Bit::ALL {
            ok &= Nand::and(a, b).to_bool() == (a.to_bool() && b.to_bool());
            ok &= Nand::or(a, b).to_bool() == (a.to_bool() || b.to_bool());
            ok &= Nand::xor(a, b).to_bool() == (a.to_bool() ^ b.to_bool());
        }
    }
    check("Gate truth tables", ok);

    // Test 2: Mux / DMux
    ok = true;
    for a in Bit::ALL {
        for b in Bit::ALL {
            for s in Bit::ALL {
                ok &= Nand::mux(a, b, s) == (if s.is_high() { b } else { a });
            }
        }
        ok &= Nand::dmux(a, Bit::Low) == (a, Bit::Low);
        ok &= Nand::dmux(a, Bit::High) == (Bit::Low, a);
    }
    check("Mux/DMux truth tables", ok);

    // Test 3: Not16 involution
    ok = [0u16, 1, 0x1234, 0x8000, 0xFFFF]
        .into_iter()
        .map(Bus16::from_u16)
        .all(|w| Nand::not16(Nand::not16(w)) == w);
    check("Not16 involution", ok);

    // Test 4: Adder boundaries
    let add = |a: u16, b: u16| Nand::add16(Bus16::from_u16(a), Bus16::from_u16(b)).to_u16();
    ok = add(0, 0) == 0 && add(0xFFFF, 1) == 0 && add(0xFFFF, 0xFFFF) == 0xFFFE && add(1234, 4321) == 5555;
    check("add16 boundary cases", ok);

    // Test 5: Incrementer
    ok = [0u16, 1, 0x7FFF, 0xFFFF]
        .into_iter()
        .map(Bus16::from_u16)
        .all(|w| Nand::inc16(w) == Nand::add16(w, Bus16::from_u16(1)));
    check("inc16 == add16(a, 1)", ok);

    // Test 6: Selector trees
    let words: [Bus16; 8] = std::array::from_fn(|k| Bus16::from_u16(0x1000 + k as u16));
    let [a, b, c, d, e, f, g, h] = words;
    ok = (0..8u16).all(|k| {
        let s = Bus3::from_u16(k);
        let dmux = Nand::dmux8way(Bit::High, s);
        Nand::mux8way16(a, b, c, d, e, f, g, h, s) == words[k as usize]
            && (0..8).all(|j| dmux.get(j) == Bit::from_bool(j == k as usize))
    }) && (0..4u16).all(|k| {
        let s = Bus2::from_u16(k);
        Nand::mux4way16(a, b, c, d, s) == words[k as usize]
            && Nand::dmux4way(Bit::High, s).to_u16() == 0b1000 >> k
    });
    check("4-way/8-way selector routing", ok);

    // Test 7: All canonical ALU operations
    let samples = [(0u16, 0u16), (1, 2), (0x1234, 0x00FF), (0xFFFF, 0x8000)];
    ok = AluOp::ALL.iter().all(|op| {
        samples.iter().all(|&(x, y)| {
            let result = Nand::compute(Bus16::from_u16(x), Bus16::from_u16(y), *op);
            let expected = op.reference(x, y);
            result.out.to_u16() == expected
                && result.zr == Bit::from_bool(expected == 0)
                && result.ng == Bit::from_bool((expected as i16) < 0)
        })
    });
    check("ALU canonical operations", ok);

    // Test 8: ALU scenarios
    let r = Nand::compute(Bus16::from_u16(1), Bus16::from_u16(2), AluOp::Add);
    let mut scenario = r.out.to_u16() == 3 && r.zr == Bit::Low && r.ng == Bit::Low;
    let r = Nand::compute(Bus16::zero(), Bus16::zero(), AluOp::Zero);
    scenario &= r.out.to_u16() == 0 && r.zr == Bit::High && r.ng == Bit::Low;
    let r = Nand::compute(Bus16::from_u16(1), Bus16::zero(), AluOp::NegX);
    scenario &= r.out.to_u16() == 0xFFFF && r.zr == Bit::Low && r.ng == Bit::High;
    check("ALU scenarios (x+y, 0, -x)", scenario);

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
