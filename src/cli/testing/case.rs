use crate::cli;

/// One `extrato` command line and what it must return.
pub struct Invocation<'a> {
    /// Arguments including the program name, which is ignored and usually
    /// left empty.
    pub args: &'a [&'a str],
    pub res: cli::testing::ResultMatcher<'a>,
}

impl Invocation<'_> {
    fn check(&self, fs: &crate::base::Fs) {
        let root = match <cli::Root as clap::Parser>::try_parse_from(self.args) {
            Ok(cmd) => cmd,
            Err(e) => panic!("{}", e),
        };
        self.res.assert_matches(root.run(fs));
    }
}

/// Commands run against a scratch repository that may change its config,
/// source file or cache. `final_state` lists every file expected afterwards.
pub struct MutCase<'a> {
    pub invocations: &'a [Invocation<'a>],
    pub initial_state: cli::testing::StrState<'a>,
    pub final_state: cli::testing::State,
}

impl MutCase<'_> {
    pub fn run(self) {
        let (fs, _td) = cli::testing::tempfs();
        self.initial_state.to_fs(&fs);
        self.invocations.iter().for_each(|inv| inv.check(&fs));
        assert_eq!(cli::testing::State::from_fs(&fs), self.final_state);
    }
}

/// Commands run against a scratch repository that must come out of the run
/// unchanged. A cache rewritten with its own contents counts as unchanged.
pub struct Case<'a> {
    pub invocations: &'a [Invocation<'a>],
    pub initial_state: cli::testing::StrState<'a>,
}

impl Case<'_> {
    pub fn run(self) {
        MutCase {
            invocations: self.invocations,
            final_state: self.initial_state.to_state(),
            initial_state: self.initial_state,
        }
        .run()
    }
}

/// Expands `(name, case)` pairs into `#[test]` functions inside a
/// `cmd_testcases` submodule of the calling module.
macro_rules! generate_testcases {
    ($(($name:ident, $testcase:expr)),+ $(,)?) => {
        mod cmd_testcases {
            use super::*;

            $(
                #[test]
                fn $name() {
                    $testcase.run()
                }
            )+
        }
    };
}

pub(crate) use generate_testcases;
