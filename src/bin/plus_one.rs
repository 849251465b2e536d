// Copyright 2024, Horizen Labs, Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    fs::File,
    io::{Read, Write},
    path::PathBuf,
};

use anyhow::Context;
use argh::FromArgs;
use incrementer::plus_one;
use serde::Serialize;

#[derive(FromArgs)]
/// Add one to each value.
struct PlusOne {
    /// print results as json objects
    #[argh(switch, short = 'j')]
    json: bool,

    /// input data (`-` for stdin)
    #[argh(option, short = 'i')]
    input: Option<PathBuf>,

    /// values to increment (none to read the input)
    #[argh(positional)]
    values: Vec<String>,
}

#[derive(Serialize)]
struct Record {
    input: i32,
    output: i32,
}

impl PlusOne {
    fn run(&self) -> anyhow::Result<()> {
        let tokens = self.tokens()?;
        let mut output = std::io::stdout().lock();
        for token in tokens.iter().map(String::as_str) {
            let input: i32 = token
                .parse()
                .with_context(|| format!("Invalid integer {token:?}"))?;
            let result = plus_one(input).with_context(|| format!("Incrementing {token:?}"))?;
            log::debug!("{input} -> {result}");
            self.write(&mut output, input, result)?;
        }
        Ok(())
    }

    fn tokens(&self) -> anyhow::Result<Vec<String>> {
        if !self.values.is_empty() && self.input.is_none() {
            return Ok(self.values.clone());
        }
        let mut data = String::new();
        self.get_input_file()
            .context("Cannot open input file")?
            .read_to_string(&mut data)
            .context("Cannot read input string")?;
        Ok(self
            .values
            .iter()
            .cloned()
            .chain(data.split_whitespace().map(str::to_owned))
            .collect())
    }

    fn write(&self, output: &mut impl Write, input: i32, result: i32) -> anyhow::Result<()> {
        if self.json {
            serde_json::to_writer(
                &mut *output,
                &Record {
                    input,
                    output: result,
                },
            )
            .context("Write json data")?;
            writeln!(output).context("Write data")
        } else {
            writeln!(output, "{result}").context("Write data")
        }
    }

    fn get_input_file(&self) -> anyhow::Result<Box<dyn Read>> {
        match self.input {
            Some(ref path) if path.as_os_str() != "-" => Ok(Box::new(
                File::open(path).with_context(|| format!("Opening {path:?}"))?,
            )),
            _ => Ok(Box::new(std::io::stdin())),
        }
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let plus_one: PlusOne = argh::from_env();

    plus_one.run()
}
