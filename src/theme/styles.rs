//! Global CSS styles for the portfolio.
//!
//! Dark slate background, blue / emerald accents, monospace detail text.
//! Reveal sections get their offset, opacity and transition inline from
//! `RevealState::style`; the rules here only lay them out.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SLATE (Backgrounds, Text) */
  --slate-950: #020617;
  --slate-900: #0f172a;
  --slate-800: #1e293b;
  --slate-600: #475569;
  --slate-400: #94a3b8;
  --slate-300: #cbd5e1;
  --slate-100: #f1f5f9;

  /* BLUE (Structure, Headings) */
  --blue-300: #93c5fd;
  --blue-400: #60a5fa;
  --blue-500: #3b82f6;
  --blue-glow: rgba(59, 130, 246, 0.8);
  --blue-line: rgba(59, 130, 246, 0.3);

  /* EMERALD (Highlights) */
  --emerald-400: #34d399;
  --emerald-500: #10b981;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-4xl: 2.25rem;
  --text-6xl: 3.75rem;
  --text-8xl: 6rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--slate-950);
  color: var(--slate-100);
  line-height: 1.6;
  min-height: 100vh;
  overflow-x: hidden;
}

.portfolio {
  position: relative;
}

.mesh-line {
  position: fixed;
  inset: 0;
  pointer-events: none;
  background-image:
    linear-gradient(var(--blue-line) 1px, transparent 1px),
    linear-gradient(90deg, var(--blue-line) 1px, transparent 1px);
  background-size: 80px 80px;
  opacity: 0.08;
  z-index: 0;
}

/* === Hero === */
.hero {
  position: relative;
  height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  text-align: center;
  padding: 0 1rem;
}

.hero-intro {
  animation: hero-intro 1s ease forwards;
}

.hero-title {
  font-size: var(--text-6xl);
  font-weight: 800;
  background: linear-gradient(to right, var(--blue-400), var(--emerald-400));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-tagline {
  margin-top: 1rem;
  font-family: var(--font-mono);
  font-size: var(--text-xl);
  letter-spacing: 0.1em;
  color: var(--slate-400);
}

.scroll-hint {
  margin-top: 5rem;
  color: var(--blue-400);
  text-decoration: none;
  animation: bounce 1s infinite;
}

@keyframes hero-intro {
  from { opacity: 0; transform: scale(0.8); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes bounce {
  0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
  50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
}

/* === Reveal Sections === */
.reveal-section {
  position: relative;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  padding: 5rem 2rem;
  margin-left: 1rem;
  border-left: 1px solid var(--blue-line);
  will-change: opacity, transform;
}

.timeline-node {
  position: absolute;
  left: -9px;
  top: 50%;
  width: 1rem;
  height: 1rem;
  border-radius: 50%;
  background: var(--blue-500);
  box-shadow: 0 0 15px var(--blue-glow);
}

.section-heading {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-bottom: 2rem;
}

.section-icon.accent {
  color: var(--blue-400);
  flex-shrink: 0;
}

.section-title {
  font-size: var(--text-4xl);
  font-weight: 700;
  letter-spacing: -0.025em;
  text-transform: uppercase;
}

/* === Cards === */
.card {
  padding: 1.5rem;
  border: 1px solid var(--slate-800);
  border-radius: 0.75rem;
  background: rgba(15, 23, 42, 0.4);
}

.card.glass {
  background: rgba(15, 23, 42, 0.5);
  backdrop-filter: blur(12px);
}

.role-heading {
  font-size: var(--text-2xl);
  font-weight: 700;
  color: var(--blue-300);
}

.role-summary {
  margin-bottom: 1rem;
  font-style: italic;
  color: var(--slate-400);
}

.highlights {
  list-style: disc inside;
  color: var(--slate-300);
}

.highlights li + li {
  margin-top: 0.5rem;
}

.muted {
  color: var(--slate-400);
}

.project-grid,
.achievements-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1.5rem;
}

.project-card {
  border-radius: 0.5rem;
  transition: border-color var(--transition-normal);
}

.project-card:hover {
  border-color: rgba(59, 130, 246, 0.5);
}

.project-name {
  margin-bottom: 0.5rem;
  font-size: var(--text-xl);
  font-weight: 700;
}

/* === Skill Pills === */
.skill-pills {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  list-style: none;
}

.pill {
  padding: 0.5rem 1rem;
  border: 1px solid var(--blue-line);
  border-radius: 9999px;
  background: rgba(59, 130, 246, 0.1);
  color: var(--blue-300);
  font-family: var(--font-mono);
}

/* === Publications === */
.publications {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.publication {
  padding-left: 1rem;
  border-left: 2px solid var(--emerald-500);
}

.publication-title {
  font-size: var(--text-xl);
  font-weight: 600;
  font-style: italic;
}

/* === Achievements === */
.subheading {
  margin-bottom: 1rem;
  font-weight: 700;
  color: var(--blue-400);
}

.award {
  color: var(--slate-300);
  text-decoration: underline;
}

.certifications {
  list-style: none;
  color: var(--slate-300);
}

.certifications li::before {
  content: "\2022  ";
}

/* === Narrative === */
.narrative {
  background: rgba(16, 185, 129, 0.05);
  border-color: rgba(16, 185, 129, 0.2);
}

.markdown.lead {
  font-size: var(--text-lg);
  line-height: 1.75;
  color: var(--slate-300);
}

/* === Footer === */
.page-footer {
  padding: 2.5rem 0;
  text-align: center;
  font-size: var(--text-sm);
  color: var(--slate-600);
}

/* === Load Error === */
.load-error {
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  gap: 1rem;
  min-height: 100vh;
  color: var(--slate-400);
}

/* === Wider Screens === */
@media (min-width: 768px) {
  .hero-title {
    font-size: var(--text-8xl);
  }

  .reveal-section {
    margin-left: 5rem;
    padding: 5rem 6rem;
  }

  .project-grid {
    grid-template-columns: repeat(2, 1fr);
  }

  .achievements-grid {
    grid-template-columns: repeat(2, 1fr);
    gap: 2rem;
  }
}
"#;
