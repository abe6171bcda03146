//! Built-in README templates.
//!
//! Templates are compiled into the binary. Each one starts with
//! `# {{PROJECT_NAME}}` and only references variables listed in
//! [`RenderContext::VARIABLES`](readmegen_core::domain::RenderContext::VARIABLES).
//!
//! | id         | adds                                                  |
//! |------------|-------------------------------------------------------|
//! | `minimal`  | title, description, features, license                 |
//! | `standard` | table of contents, installation, usage, contributing  |
//! | `fancy`    | badges, emoji headings, contributors, footer          |

use readmegen_core::domain::{TemplateDefinition, TemplateKind};

const MINIMAL_CONTENT: &str = "# {{PROJECT_NAME}}

{{DESCRIPTION}}

## Features

{{FEATURES}}

## License

{{LICENSE}}
";

const STANDARD_CONTENT: &str = "# {{PROJECT_NAME}}

{{DESCRIPTION}}

## Table of Contents

- [Features](#features)
- [Installation](#installation)
- [Usage](#usage)
- [Contributing](#contributing)
- [License](#license)

## Features

{{FEATURES}}

## Installation

{{INSTALLATION}}

## Usage

{{USAGE}}

## Contributing

Contributions are welcome! Please open an issue to discuss what you would like
to change, then submit a pull request.

## License

{{LICENSE}}
";

const FANCY_CONTENT: &str = "# {{PROJECT_NAME}}

{{LICENSE_BADGE}}

> {{DESCRIPTION}}

## 📚 Table of Contents

- [✨ Features](#-features)
- [📦 Installation](#-installation)
- [🚀 Usage](#-usage)
- [👥 Contributors](#-contributors)
- [🤝 Contributing](#-contributing)
- [📄 License](#-license)

## ✨ Features

{{FEATURES}}

## 📦 Installation

{{INSTALLATION}}

## 🚀 Usage

{{USAGE}}

## 👥 Contributors

{{CONTRIBUTORS}}

## 🤝 Contributing

1. Fork the repository
2. Create your feature branch (`git checkout -b feature/amazing-feature`)
3. Commit your changes (`git commit -m 'Add amazing feature'`)
4. Push to the branch (`git push origin feature/amazing-feature`)
5. Open a pull request

## 📄 License

{{LICENSE}}

---

<p align=\"center\">
  Made with ❤️ for {{PROJECT_NAME}}<br>
  {{REPOSITORY_URL}}
</p>
";

pub const MINIMAL: TemplateDefinition = TemplateDefinition {
    id: TemplateKind::Minimal,
    title: "🎯 Minimal",
    description: "Just the essentials, nothing more",
    includes: &["Title", "Description", "Features", "License"],
    best_for: "Small scripts, experiments and personal projects",
    content: MINIMAL_CONTENT,
};

pub const STANDARD: TemplateDefinition = TemplateDefinition {
    id: TemplateKind::Standard,
    title: "📋 Standard",
    description: "A well-rounded README with the sections most projects need",
    includes: &[
        "Title",
        "Description",
        "Table of contents",
        "Features",
        "Installation",
        "Usage",
        "Contributing",
        "License",
    ],
    best_for: "Most open-source libraries and tools",
    content: STANDARD_CONTENT,
};

pub const FANCY: TemplateDefinition = TemplateDefinition {
    id: TemplateKind::Fancy,
    title: "✨ Fancy",
    description: "Eye-catching README with badges and emoji headings",
    includes: &[
        "Title",
        "Badges",
        "Description",
        "Table of contents",
        "Features",
        "Installation",
        "Usage",
        "Contributors",
        "Contributing",
        "License",
        "Footer",
    ],
    best_for: "Showcase projects and public releases",
    content: FANCY_CONTENT,
};

/// Every built-in template, in display order.
pub fn all() -> [TemplateDefinition; 3] {
    [MINIMAL, STANDARD, FANCY]
}

pub fn get(kind: TemplateKind) -> TemplateDefinition {
    match kind {
        TemplateKind::Minimal => MINIMAL,
        TemplateKind::Standard => STANDARD,
        TemplateKind::Fancy => FANCY,
    }
}
