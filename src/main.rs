use clap::Parser;
use learn_opengl::config::Overrides;
use learn_opengl::{Config, LessonId};
use log::error;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "learn-opengl")]
#[command(about, version, long_about = None)]
struct Cli {
    /// Lesson to run, see --list
    lesson: Option<String>,
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Window width override
    #[arg(long)]
    width: Option<u32>,
    /// Window height override
    #[arg(long)]
    height: Option<u32>,
    /// Directory holding shaders/ and textures/
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,
    /// Print the available lessons and exit
    #[arg(short, long, default_value_t = false)]
    list: bool,
}

#[derive(Debug, PartialEq)]
enum Command {
    List,
    Run(LessonId),
}

impl Cli {
    /// Without a lesson name the lesson list is printed.
    fn command(&self) -> learn_opengl::Result<Command> {
        match self.lesson {
            Some(ref name) if !self.list => Ok(Command::Run(name.parse()?)),
            _ => Ok(Command::List),
        }
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            width: self.width,
            height: self.height,
            assets: self.assets.clone(),
        }
    }
}

fn print_lessons() {
    for id in LessonId::ALL.iter() {
        println!("{:<22} {}", id.name(), id.description());
    }
}

fn run(cli: Cli) -> learn_opengl::Result<()> {
    let lesson = match cli.command()? {
        Command::List => {
            print_lessons();
            return Ok(());
        }
        Command::Run(lesson) => lesson,
    };
    let mut config = match cli.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_overrides(cli.overrides());
    lesson.run(&config)
}

fn main() {
    env_logger::init();
    if let Err(err) = run(Cli::parse()) {
        error!("{}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn no_lesson_lists() {
        assert_eq!(parse(&["learn-opengl"]).command().unwrap(), Command::List);
        assert_eq!(parse(&["learn-opengl", "--list", "textures"]).command().unwrap(), Command::List);
    }

    #[test]
    fn lesson_name_selects_lesson() {
        let cli = parse(&["learn-opengl", "shader-class"]);
        assert_eq!(cli.command().unwrap(), Command::Run(LessonId::ShaderClass));
        assert!(parse(&["learn-opengl", "hello-cube"]).command().is_err());
    }

    #[test]
    fn size_and_assets_flags_become_overrides() {
        let cli = parse(&["learn-opengl", "textures", "--width", "1024", "--assets", "data"]);
        assert_eq!(
            cli.overrides(),
            Overrides {
                width: Some(1024),
                height: None,
                assets: Some(PathBuf::from("data")),
            },
        );
    }
}
