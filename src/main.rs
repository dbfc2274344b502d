use echecs::core::board::Board;
use echecs::utils::error::EchecsResult;
use echecs::utils::logger;
use echecs::utils::parser::{self, Mode};
use echecs::utils::printer::{DarkView, DefaultPrinter, LightView, PrettyPrinter};

fn main() -> EchecsResult<()> {
    let env_args: Vec<String> = std::env::args().collect();
    let args = parser::parse_args_from(env_args);

    logger::init_stdout(args.verbose.log_level_filter());
    log::debug!("Invoke parameters: {args:?}");

    let mut board = Board::new_empty();
    if let Err(e) = board.populate() {
        log::error!("{e}");
        return Err(e);
    }

    if matches!(args.mode, Mode::Shading | Mode::Both) {
        print!("{}", board.render_shading());
    }

    if matches!(args.mode, Mode::Pieces | Mode::Both) {
        let rendered = match (args.pretty, args.flip) {
            (true, true) => board.render_pieces::<PrettyPrinter, DarkView>(),
            (true, false) => board.render_pieces::<PrettyPrinter, LightView>(),
            (false, true) => board.render_pieces::<DefaultPrinter, DarkView>(),
            (false, false) => board.render_pieces::<DefaultPrinter, LightView>(),
        };
        print!("{rendered}");
    }

    Ok(())
}
