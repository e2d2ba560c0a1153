use crate::config::Config;
use crate::ops::git::GitOps;
use crate::ops::portage::PortageOps;

pub struct App<G: GitOps, P: PortageOps> {
    pub config: Config,
    pub git: G,
    pub portage: P,
}

impl<G: GitOps, P: PortageOps> App<G, P> {
    pub fn new(config: Config, git: G, portage: P) -> Self {
        Self {
            config,
            git,
            portage,
        }
    }
}
