use relax2d::cli::Args;
use relax2d::solver::SolverLoop;

fn main() {
    let args = Args::cli_setup("relax_2d");

    let solver = match SolverLoop::new(args.configuration()) {
        Ok(solver) => solver,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(2);
        }
    };

    let mut renderer = args.renderer();
    match solver.run(&mut renderer) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
