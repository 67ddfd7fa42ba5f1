//! The narration catalogue.
//!
//! Every [`NarrationKey`] maps to exactly one narration. Bodies mark audio
//! positions with [`AUDIO_PLACEHOLDER`]; the number of markers always equals
//! the number of cues.

use puzzle_prison_core::progress::QuestPoint;
use puzzle_prison_world::domain::entities::{Category, Corner, Entity, Terminal, Wall};

use super::audio::AudioCue;
use super::narration::{
    AUDIO_PLACEHOLDER as AUDIO, Approach, Letter, Narration, NarrationKey, QuizReply,
};

const PROMPT: &str = "What would you like to do?";
const OPTIONS_PROMPT: &str = "Which option do you choose? One or two?";
const LETTER_ARRIVES: &str = "You hear a noise and see a letter fall through the letter box. ";

const INSTRUCTIONS: &str = "Say, walk to, followed by something in the room to move towards \
    that object. Say, interact with, followed by something in the room to use that object. \
    Say help, to hear these instructions again at any point during the game. \
    Say repeat, to get an overview of the room and say stop, to stop playing. ";

/// Looks up the narration for `key`.
#[must_use]
pub fn narrate(key: NarrationKey) -> Narration {
    match key {
        NarrationKey::Misunderstood => plain(
            "I didn't understand",
            "Sorry, I didn't understand what you said. \
             Say, help, to receive a list of possible commands. ",
            PROMPT,
        ),
        NarrationKey::Error => plain("Something went wrong", "Sorry something went wrong. ", ""),
        NarrationKey::AlreadyPlaying { in_quiz } => {
            let prompt = if in_quiz { OPTIONS_PROMPT } else { PROMPT };
            plain(
                "You are already playing",
                &format!(
                    "You are already playing. To restart say, start over. \
                     For instructions on how to play say, help. {prompt}"
                ),
                prompt,
            )
        }
        NarrationKey::Start(quest_point) => start(quest_point),
        NarrationKey::TimePassed => Narration {
            title: "Welcome back to Puzzle Prison".to_owned(),
            body: format!(
                "Welcome back to puzzle prison. You awake from a well deserved break and look \
                 around the square room. {AUDIO}{LETTER_ARRIVES}{PROMPT}"
            ),
            reprompt: PROMPT.to_owned(),
            audio_cues: vec![AudioCue::LetterBox],
        },
        NarrationKey::Help(quest_point) => plain(
            PROMPT,
            &format!("{INSTRUCTIONS}{}", overview(quest_point)),
            PROMPT,
        ),
        NarrationKey::Repeat(quest_point) if quest_point == QuestPoint::START => plain(
            PROMPT,
            &format!("You awake to find yourself in a room. {}", overview(quest_point)),
            PROMPT,
        ),
        NarrationKey::Repeat(quest_point) => plain(PROMPT, &overview(quest_point), PROMPT),
        NarrationKey::Farewell => Narration {
            title: "Thank you for playing!".to_owned(),
            body: format!("Your progress has been saved. Thank you for playing.{AUDIO}"),
            reprompt: String::new(),
            audio_cues: vec![AudioCue::FinishJingle],
        },
        NarrationKey::Clarify { approach, category } => clarify(approach, category),
        NarrationKey::WalkTo(entity) => walk_to(entity),
        NarrationKey::WalkToLoneTerminal => plain(
            "Walk to Computer Terminal",
            &format!("You walk up to the computer terminal. {PROMPT}"),
            PROMPT,
        ),
        NarrationKey::LapCompleted(corner) => Narration {
            title: format!("Walk to {}", Entity::Statue(corner).title()),
            body: format!(
                "You walk up to the statue in the {} corner. You see a red flash from the eyes \
                 of the raven statue. {AUDIO}{LETTER_ARRIVES}{PROMPT}",
                corner.spoken()
            ),
            reprompt: PROMPT.to_owned(),
            audio_cues: vec![AudioCue::LetterBox],
        },
        NarrationKey::KnockWall(wall) => plain(
            &format!("Knock on {}", Entity::Wall(wall).title()),
            &format!(
                "You knock on the {} wall, the wall seems to be solid brick, \
                 you couldn't find any secrets. {PROMPT}",
                wall.direction()
            ),
            PROMPT,
        ),
        NarrationKey::PushNorthWall => Narration {
            title: "You Push the North Wall".to_owned(),
            body: format!(
                "You knock on the north wall, you notice that the wall has some give to it. \
                 You give the north wall a firm push and it starts moving.{AUDIO} \
                 The northeast and northwest statues move with the wall but the computer \
                 terminal remains. The wall locks into place leaving the room square and the \
                 computer terminal in the very centre. {AUDIO}{LETTER_ARRIVES}{PROMPT}"
            ),
            reprompt: PROMPT.to_owned(),
            audio_cues: vec![AudioCue::MovingWall, AudioCue::LetterBox],
        },
        NarrationKey::ExamineStatue(corner) => plain(
            "You examine the statue",
            &format!(
                "You knock on the {} statue, it appears to be hollow inside. \
                 You run your hand across the surface and find a seam. \
                 You try to open the statue at the seam but some sort of hidden locking \
                 mechanism is stopping you. {PROMPT}",
                corner.spoken()
            ),
            PROMPT,
        ),
        NarrationKey::PeerThroughLetterBox => plain(
            "You look through the letter box",
            &format!(
                "You kneel down, open the letter box and peer through. All you see is dark \
                 emptiness, it gives you the creeps so you close the letter box. {PROMPT}"
            ),
            PROMPT,
        ),
        NarrationKey::TryMetalCabinet => plain(
            "You attempt to open the metal cabinet",
            &format!(
                "You attempt to open the metal cabinet. The cabinet is locked and the lock is \
                 stronger than it appears. You can't break the lock. {PROMPT}"
            ),
            PROMPT,
        ),
        NarrationKey::TerminalFirstUse => Narration {
            title: "Using the computer terminal".to_owned(),
            body: format!(
                "You press a button on the computer terminal and some text appears, it reads, \
                 Escape your prison. The computer seems to have stopped responding to your \
                 input. {AUDIO}{LETTER_ARRIVES}Say read, to read the letter. {PROMPT}"
            ),
            reprompt: PROMPT.to_owned(),
            audio_cues: vec![AudioCue::LetterBox],
        },
        NarrationKey::TerminalNotResponding(terminal) => {
            let which = match terminal {
                None => "the computer terminal".to_owned(),
                Some(Terminal::Central) => "the central computer terminal".to_owned(),
                Some(Terminal::Corner(corner)) => {
                    format!("the {} computer terminal", corner.spoken())
                }
            };
            plain(
                "The computer is not responding",
                &format!(
                    "You attempt to use {which}, the computer seems to be not responding, \
                     you can't find anyway to fix it. {PROMPT}"
                ),
                PROMPT,
            )
        }
        NarrationKey::TerminalStatement(corner) => {
            let quiz = TerminalText::of(corner);
            plain(
                &format!("You use the {} terminal", corner.spoken()),
                &format!(
                    "You press a button on the {} computer terminal and some text appears, \
                     it reads, {} {}Which option would you like to choose? Option one or two?",
                    corner.spoken(),
                    quiz.statement,
                    quiz.options()
                ),
                OPTIONS_PROMPT,
            )
        }
        NarrationKey::TerminalOptions(corner) => plain(
            OPTIONS_PROMPT,
            &format!(
                "{}Say, one, to select option one. Say, two, to select option two.",
                TerminalText::of(corner).options()
            ),
            OPTIONS_PROMPT,
        ),
        NarrationKey::TerminalReply(corner, reply) => terminal_reply(corner, reply),
        NarrationKey::ReadLetter { letter, first_time } => read_letter(letter, first_time),
        NarrationKey::Ending => Narration {
            title: "You read the letter".to_owned(),
            body: format!(
                "You bend down and pick up the latest letter. It reads, Believe in yourself, \
                 it's time to go. You hear a noise, the cabinet under the central computer \
                 terminal opens, revealing a ladder leading underground. You start climbing \
                 down but your foot slips. You tumble down the ladder, although bewildered, \
                 you are unharmed. You look around to find yourself on the floor of your own \
                 house, a ladder leading up to your attic rests in front of you. You look up \
                 the ladder to find the room nowhere to be found. You suddenly remember that \
                 you've got an exam to sit, you forget about the room and start getting ready. \
                 The end. Thank you for playing Puzzle Prison.{AUDIO} "
            ),
            reprompt: String::new(),
            audio_cues: vec![AudioCue::FinishJingle],
        },
    }
}

fn plain(title: &str, body: &str, reprompt: &str) -> Narration {
    Narration {
        title: title.to_owned(),
        body: body.to_owned(),
        reprompt: reprompt.to_owned(),
        audio_cues: Vec::new(),
    }
}

fn start(quest_point: QuestPoint) -> Narration {
    if quest_point == QuestPoint::START {
        return plain(
            "Welcome to Puzzle Prison",
            &format!(
                "Welcome to puzzle prison. {INSTRUCTIONS}The room has four walls but no doors. \
                 The room is rectangular with the east and west walls half the length of the \
                 north and south walls. There are four raven statues in the northeast, \
                 northwest, southeast and southwest corners of the room. A single computer \
                 terminal resting atop a locked metal cabinet sits beside the centre of the \
                 north wall. In the centre of the south wall resides a single letter box. \
                 {PROMPT}"
            ),
            PROMPT,
        );
    }
    plain(
        "Welcome back to Puzzle Prison",
        &format!("Welcome back to puzzle prison. {}", overview(quest_point)),
        PROMPT,
    )
}

/// The room as it looks at a checkpoint, followed by the prompt.
fn overview(quest_point: QuestPoint) -> String {
    let room = match quest_point.value() {
        0 => "You are in a rectangular room with four walls north, south, east and west. \
              There are four raven statues in the northeast, northwest, southeast and \
              southwest corners of the room. A computer terminal resting atop a locked metal \
              cabinet sits beside the centre of the north wall. In the centre of the south \
              wall resides a single letter box. ",
        1 | 2 => "You are in a rectangular room with four walls north, south, east and west. \
              There are four raven statues in the northeast, northwest, southeast and \
              southwest corners of the room. A computer terminal resting atop a locked metal \
              cabinet sits beside the centre of the north wall. In the centre of the south \
              wall resides a single letter box. A letter has just been posted through the box \
              and rests on the floor. ",
        3..=5 => "You are in a square room with four walls north, south, east and west. \
              There are four raven statues in the northeast, northwest, southeast and \
              southwest corners of the room. A computer terminal resting atop a locked metal \
              cabinet sits in the centre of the room. In the centre of the south wall resides \
              a single letter box. A letter has just been posted through the box and rests on \
              the floor. ",
        _ => "You are in a square room with four walls north, south, east and west. \
              There are four computer terminals in the northeast, northwest, southeast and \
              southwest corners of the room. A fifth computer terminal resting atop a locked \
              metal cabinet sits in the centre of the room. In the centre of the south wall \
              resides a single letter box. A letter has just been posted through the box and \
              rests on the floor. ",
    };
    format!("{room}{PROMPT}")
}

fn clarify(approach: Approach, category: Category) -> Narration {
    let verb = match approach {
        Approach::Walk => "walk to",
        Approach::Interact => "interact with",
    };
    let options = match category {
        Category::Wall => "north, south, east and west",
        Category::Statue | Category::Terminal => {
            "north east, north west, south east and south west"
        }
    };
    let prompt = format!("Which {}?", category.noun());
    Narration {
        title: prompt.clone(),
        body: format!(
            "Which {} would you like to {verb}? Your options are {options}.",
            category.noun()
        ),
        reprompt: prompt,
        audio_cues: Vec::new(),
    }
}

fn walk_to(entity: Entity) -> Narration {
    let place = match entity {
        Entity::Wall(wall) => format!("the {} most wall", wall.direction()),
        Entity::Statue(corner) => format!("the statue in the {} corner", corner.spoken()),
        Entity::Terminal(Terminal::Corner(corner)) => {
            format!("the computer terminal in the {} corner", corner.spoken())
        }
        Entity::Terminal(Terminal::Central) => {
            "the computer terminal in the centre of the room".to_owned()
        }
        Entity::Letter | Entity::LetterBox => {
            format!("the letter box in the {} most wall", Wall::South.direction())
        }
        Entity::MetalCabinet => "the metal cabinet beneath the computer terminal".to_owned(),
    };
    plain(
        &format!("Walk to {}", entity.title()),
        &format!("You walk up to {place}. {PROMPT}"),
        PROMPT,
    )
}

/// What a corner terminal says, and how it reacts to each answer.
struct TerminalText {
    statement: &'static str,
    option_one: &'static str,
    option_two: &'static str,
    kind_reply: &'static str,
    mean_reply: &'static str,
}

impl TerminalText {
    fn of(corner: Corner) -> Self {
        match corner {
            Corner::NorthEast => Self {
                statement: "I hope to be a great father someday.",
                option_one: "I'm sure you will.",
                option_two: "You will never have children.",
                kind_reply: "Thank you so much for your support.",
                mean_reply: "I feel awful! Why would you say that?",
            },
            Corner::NorthWest => Self {
                statement: "I want to be remembered, looked back upon as part of history.",
                option_one: "Your grave will hold a meaningless name.",
                option_two: "With enough work, you can do this.",
                kind_reply: "I will work my hardest, thank you.",
                mean_reply: "That is my greatest fear, I cannot cope with that.",
            },
            Corner::SouthEast => Self {
                statement: "As long as I can continue helping people, I will be happy.",
                option_one: "A helping hand is always needed.",
                option_two: "You can't even help yourself.",
                kind_reply: "I believe so too, if you need anything let me know.",
                mean_reply: "Why must I be punished for my selflessness?",
            },
            Corner::SouthWest => Self {
                statement: "I want to create something brand new and advance mankind.",
                option_one: "Everything that can be done, has already been done.",
                option_two: "Think outside the box, I believe in you.",
                kind_reply: "Thank you so much, have a great day!",
                mean_reply: "I'm not unique. What is the point of anything?",
            },
        }
    }

    fn options(&self) -> String {
        format!(
            "Two options appear on screen. One. {} And two. {} ",
            self.option_one, self.option_two
        )
    }
}

fn terminal_reply(corner: Corner, reply: QuizReply) -> Narration {
    let text = TerminalText::of(corner);
    let reaction = match reply {
        QuizReply::Kind => format!(
            "Text appears on the screen. It reads, {} A pixelated smiley face appears on \
             screen. ",
            text.kind_reply
        ),
        QuizReply::Mean | QuizReply::Final => format!(
            "Text appears on the screen. It reads, {} A pixelated sad face appears on screen, \
             the computer terminal seems to have stopped responding. ",
            text.mean_reply
        ),
    };
    let title = match reply {
        QuizReply::Kind => "The computer seems happy",
        QuizReply::Mean | QuizReply::Final => "You've upset the computer, it's stopped working",
    };

    if reply == QuizReply::Final {
        return Narration {
            title: title.to_owned(),
            body: format!(
                "{reaction}All the corner computers start making beeping noises.{AUDIO} \
                 {AUDIO}{LETTER_ARRIVES}{PROMPT}"
            ),
            reprompt: PROMPT.to_owned(),
            audio_cues: vec![AudioCue::ComputerBeeping, AudioCue::LetterBox],
        };
    }
    plain(title, &format!("{reaction}{PROMPT}"), PROMPT)
}

fn read_letter(letter: Letter, first_time: bool) -> Narration {
    let (pick_up, message) = match letter {
        Letter::PushBoundaries => ("the letter", "Better yourself, push your boundaries."),
        Letter::TakeALap => ("the latest letter", "Prepare yourself, take a lap to clear your head."),
        Letter::ActUncharacteristically => (
            "the latest letter",
            "Frame yourself, act uncharacteristically for perspective.",
        ),
        Letter::TakeABreak => (
            "the latest letter",
            "Remove yourself, take a break from what you're doing.",
        ),
    };
    let (event, audio_cues) = match (letter, first_time) {
        (Letter::PushBoundaries, true) => (
            format!("{AUDIO}You hear a sharp click but you can't tell where it came from. "),
            vec![AudioCue::SharpClick],
        ),
        (Letter::ActUncharacteristically, true) => (
            format!(
                "Suddenly the four statues start moving loudly{AUDIO}, they unfurl revealing \
                 four computer terminals in the northeast, southeast, northwest and southwest \
                 corners of the room. "
            ),
            vec![AudioCue::MovingStatue],
        ),
        _ => (String::new(), Vec::new()),
    };
    Narration {
        title: "You read the letter".to_owned(),
        body: format!("You bend down and pick up {pick_up}. It reads, {message} {event}{PROMPT}"),
        reprompt: PROMPT.to_owned(),
        audio_cues,
    }
}
