//! The quote list behind the `bobby` command.

use rand::seq::IndexedRandom;

/// Every quote `bobby` can answer with.
pub const QUOTES: [&str; 10] = [
    "Come on baby, why don't you come over tonight. I've got a new laser pointer.",
    "He can have a new flavor every day! He's dating the ice cream lady!",
    "You had me at \"fruit pies.\"",
    "I'm going to grow up without anyone to love and die friendless and alone like Weird Al Yancovich.",
    "My dad says butane's a bastard gas.",
    "Hey, I didn't go looking for trouble. Trouble came-a-knockin' and Bobby Hill's foot answered the door.",
    "My sloppy joe is all sloppy and no joe!",
    "It's not a crutch dad, it's just something I'm relying on to get me through life.",
    "Look, dad, I'm not gonna do drugs. I want to be the first chubby comedian to live past 35.",
    "Can I put a gun rack on my bike?",
];

/// Pick a quote uniformly at random.
pub fn random_quote() -> &'static str {
    QUOTES.choose(&mut rand::rng()).copied().unwrap_or_default()
}
