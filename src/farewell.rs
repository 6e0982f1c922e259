use colored::Colorize;
use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

const CHARGING: [&str; 13] = [
    "[            ]",
    "[=           ]",
    "[==          ]",
    "[===         ]",
    "[====        ]",
    "[=====       ]",
    "[======      ]",
    "[=======     ]",
    "[========    ]",
    "[=========   ]",
    "[==========  ]",
    "[=========== ]",
    "[===========💥]",
];

/// Shutdown animation shown by `exit`. Purely cosmetic.
#[derive(Debug, Clone)]
pub struct Farewell {
    frame_delay: Duration,
}

impl Farewell {
    pub fn new(frame_delay: Duration) -> Self {
        Self { frame_delay }
    }

    pub fn play(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", "Shutting down...".red().bold())?;
        for frame in CHARGING {
            write!(out, "\r{}", frame.yellow().bold())?;
            out.flush()?;
            if !self.frame_delay.is_zero() {
                thread::sleep(self.frame_delay);
            }
        }
        writeln!(out, "\n{}", "✅ EXIT ✅".cyan().bold())?;
        out.flush()
    }
}
