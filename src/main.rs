use std::{env, process};

use hack_code::{encode_comp, encode_dest, encode_instruction, encode_jump};

fn run(dest: &str, comp: &str, jump: &str) -> hack_code::Result<()> {
    let word = encode_instruction(dest, comp, jump)?;

    println!("dest {}", encode_dest(dest));
    println!("comp {}", encode_comp(comp)?);
    println!("jump {}", encode_jump(jump)?);
    println!("{:016b}", word);

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("hack-code", String::as_str);
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <comp> [dest] [jump]", program);
        process::exit(2);
    }

    let comp = &args[1];
    let dest = args.get(2).map_or("", String::as_str);
    let jump = args.get(3).map_or("", String::as_str);

    if let Err(err) = run(dest, comp, jump) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
