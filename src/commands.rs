/// A line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the favorites text and submit it
    Favorites(String),
    /// Only set the favorites text
    Type(String),
    Submit,
    Like,
    Dislike,
    Stop,
    Songs,
    Back,
    Show,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub const HELP: &str = "\
Commands:
  favorites <song, song, ...>   get a recommendation from your favorite songs (alias: f)
  type <song, song, ...>        enter favorites without submitting
  submit                        submit the favorites you entered
  like | dislike                rate the current recommendation
  stop                          stop recommendations for this session
  songs                         show the songs you liked
  back                          return to recommendations
  show                          redraw the current screen
  help                          this message
  quit                          exit (also Ctrl-C / Ctrl-D)";

impl Command {
    pub fn parse(line: &str) -> Command {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" => Command::Empty,
            "favorites" | "f" => Command::Favorites(rest.to_string()),
            "type" => Command::Type(rest.to_string()),
            "submit" => Command::Submit,
            "like" | "yes" => Command::Like,
            "dislike" | "no" => Command::Dislike,
            "stop" => Command::Stop,
            "songs" | "your-songs" => Command::Songs,
            "back" | "home" => Command::Back,
            "show" | "ls" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(word.to_string()),
        }
    }
}
