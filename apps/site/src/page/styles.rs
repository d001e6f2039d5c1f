/// Inline stylesheet for the whole page.
pub const SITE_CSS: &str = r#"
:root { color-scheme: dark; --line: rgba(255,255,255,0.1); --muted: rgba(255,255,255,0.7); }
* { box-sizing: border-box; }
body { margin: 0; background: #050505; color: #f4f4f5; font-family: system-ui, sans-serif; -webkit-font-smoothing: antialiased; }
a { color: inherit; }
.container { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
.site-header { position: sticky; top: 0; z-index: 50; border-bottom: 1px solid rgba(39,39,42,0.7); background: rgba(0,0,0,0.3); backdrop-filter: blur(12px); }
.site-header .container { display: flex; justify-content: space-between; align-items: center; padding-top: .75rem; padding-bottom: .75rem; }
.site-nav { display: flex; gap: 1.5rem; }
.navlink { text-decoration: none; color: var(--muted); }
.navlink:hover { color: #fff; }
.section { padding: 5rem 0; }
.stack { display: grid; gap: 1.5rem; }
.h1 { font-size: clamp(2rem, 5vw, 3.5rem); font-weight: 600; margin: 0; }
.h2 { font-size: 1.75rem; font-weight: 600; margin: 0; }
.subtle { color: var(--muted); }
.grid-2 { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); }
.grid-4 { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); }
.card { border: 1px solid var(--line); border-radius: 1rem; background: rgba(255,255,255,0.04); padding: 1.5rem; }
.btn { display: flex; align-items: center; justify-content: space-between; text-decoration: none; }
.pursuits-scroll { height: 22rem; overflow: auto; padding-right: .25rem; }
.pursuits-list { display: grid; gap: .75rem; }
.pursuit-card { display: flex; gap: .75rem; padding: .75rem; border: 1px solid var(--line); border-radius: 1rem; background: rgba(255,255,255,0.05); text-decoration: none; }
.pursuit-card:hover { background: rgba(255,255,255,0.1); }
.pursuit-thumb { width: 6rem; height: 4rem; flex-shrink: 0; overflow: hidden; border-radius: .75rem; border: 1px solid var(--line); }
.pursuit-thumb img, .gallery-item img { width: 100%; height: 100%; object-fit: cover; }
.pursuit-summary { min-width: 0; }
.pursuit-title { font-weight: 500; margin: 0; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.pursuit-short { font-size: .875rem; color: var(--muted); margin: .25rem 0 0; }
.clamp-2 { display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; overflow: hidden; }
.pursuit-hint { font-size: .75rem; color: rgba(255,255,255,0.5); margin: .5rem 0 0; }
.overlay { position: fixed; inset: 0; z-index: 100; }
.overlay-backdrop { position: absolute; inset: 0; background: rgba(0,0,0,0.7); }
.overlay-panel { position: relative; max-width: 64rem; margin: 1.5rem auto; max-height: calc(100% - 3rem); overflow: auto; border: 1px solid var(--line); border-radius: 1.5rem; background: rgba(0,0,0,0.5); backdrop-filter: blur(24px); }
.overlay-header { display: flex; justify-content: space-between; align-items: flex-start; gap: 1rem; padding: 1.5rem; border-bottom: 1px solid var(--line); }
.overlay-header h3 { margin: 0; font-size: 1.5rem; }
.overlay-close { border: 1px solid rgba(255,255,255,0.2); border-radius: 999px; padding: .25rem .75rem; text-decoration: none; }
.overlay-body { padding: 1.5rem; display: grid; gap: 1.5rem; color: var(--muted); line-height: 1.6; }
.gallery { display: grid; gap: .75rem; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); }
.gallery-item { aspect-ratio: 16 / 9; overflow: hidden; border-radius: 1rem; border: 1px solid var(--line); }
.contact-form { display: grid; gap: .75rem; max-width: 36rem; }
.contact-form input, .contact-form textarea { background: rgba(0,0,0,0.4); border: 1px solid #27272a; border-radius: .75rem; padding: .75rem 1rem; color: inherit; font: inherit; }
.contact-form button { justify-content: center; padding: .75rem; border-radius: .75rem; border: 1px solid var(--line); background: rgba(255,255,255,0.08); color: inherit; font: inherit; cursor: pointer; }
.contact-form button[disabled] { opacity: .6; cursor: wait; }
.hp { position: absolute; left: -10000px; width: 1px; height: 1px; overflow: hidden; }
.site-footer { padding: 2.5rem 0; text-align: center; font-size: .75rem; color: #71717a; }
"#;
