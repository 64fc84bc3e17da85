use std::io;

use rand::rngs::StdRng;
use rand::SeedableRng;

use delve::build_info;
use delve::core::game_loop;
use delve::core::session::GameSession;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "delve {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Delve - Terminal Dungeon Crawler RPG\n");
                println!("Usage: delve [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'delve --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut session = GameSession::new();
    let mut rng = StdRng::from_entropy();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    game_loop::run(&mut session, &mut input, &mut out, &mut rng)
}
